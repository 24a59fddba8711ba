//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// 日志初始化配置
pub struct LogConfig {
    /// 日志目录
    pub log_dir: String,
    /// 日志文件前缀
    pub file_prefix: String,
    /// 是否同时输出到控制台
    pub console_output: bool,
    /// 默认级别，`RUST_LOG` 优先
    pub level: String,
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            log_dir: config.log_dir.to_string_lossy().into_owned(),
            file_prefix: config.file_prefix.clone(),
            console_output: config.console_output,
            level: config.level.clone(),
        }
    }
}

/// 初始化日志系统
///
/// 按日期分割写入文件，可选同时输出到控制台。
/// 返回的 guard 必须在进程生命周期内保持存活，否则缓冲的日志会丢失。
pub fn init_logging(config: LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
    let (non_blocking, guard) = non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}
