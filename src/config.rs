use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 服务配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 存储配置
    pub database: DatabaseConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 商品目录行为
    pub catalog: CatalogConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
    /// 请求未携带 Host 头时，Location 使用的主机名
    pub public_host: String,
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    /// 数据库连接串
    pub url: String,
    /// 连接池最大连接数
    pub max_connections: u32,
    /// 获取连接超时（秒）
    pub acquire_timeout_seconds: u64,
    /// 存储为空时写入示例商品
    pub seed_sample_data: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志文件路径
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 读取时也拒绝售价不高于进价的已存储商品（返回 409）
    pub reject_free_on_read: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            timeout_seconds: 30,
            public_host: "localhost".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            url: "sqlite://microcommerce.db?mode=rwc".to_string(),
            max_connections: 5,
            acquire_timeout_seconds: 8,
            seed_sample_data: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            file_prefix: "microcommerce".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 用外部提供的变量覆盖配置
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(port) = lookup("MICROCOMMERCE_PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的端口: {}", port)))?;
        }
        Ok(())
    }

    /// 用环境变量 `DATABASE_URL`、`MICROCOMMERCE_PORT` 覆盖配置
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        if self.database.backend == StorageBackend::Sqlite && self.database.url.is_empty() {
            return Err(ConfigError::Validation("数据库连接串不能为空".to_string()));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation("最大连接数必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载结果及其来源文件，`source` 为 `None` 表示使用默认配置
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
}

/// 从文件或默认值加载配置
///
/// 指定路径时只读该文件；否则依次尝试 `config.toml`、`./config/config.toml`。
/// 加载后应用环境变量覆盖并校验。此时日志尚未初始化，来源由调用方记录。
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let source = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => ["config.toml", "./config/config.toml"]
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists()),
    };

    let mut config = match &source {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(LoadedConfig { config, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.public_host, "localhost");
        assert_eq!(config.database.backend, StorageBackend::Sqlite);
        assert!(!config.catalog.reject_free_on_read);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.database.url = String::new();
        assert!(config.validate().is_err());

        config.database.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.http.port = 9090;
        config.database.backend = StorageBackend::Memory;
        config.save_to_file(&config_path).unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 9090);
        assert_eq!(loaded.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[database]\nbackend = \"memory\"\n\n[catalog]\nreject_free_on_read = true\n",
        )
        .unwrap();

        let LoadedConfig { config: loaded, source } = load_config(Some(&config_path)).unwrap();
        assert_eq!(source.as_deref(), Some(config_path.as_path()));
        assert_eq!(loaded.database.backend, StorageBackend::Memory);
        assert!(loaded.catalog.reject_free_on_read);
        assert_eq!(loaded.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(|key| match key {
                "DATABASE_URL" => Some("sqlite::memory:".to_string()),
                "MICROCOMMERCE_PORT" => Some("9000".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.http.port, 9000);

        let err = config.apply_overrides(|key| {
            (key == "MICROCOMMERCE_PORT").then(|| "not-a-port".to_string())
        });
        assert!(err.is_err());
    }
}
