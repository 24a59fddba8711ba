use microcommerce::config::{load_config, LoadedConfig};
use microcommerce::infrastructure::logger::{init_logging, LogConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 可选参数：配置文件路径
    let config_path = env::args().nth(1).map(PathBuf::from);
    let LoadedConfig { config, source } = load_config(config_path.as_deref())?;

    let _guard = init_logging(LogConfig::from(&config.logging))?;
    info!("启动商品目录服务...");
    match source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }

    microcommerce::server::run(config).await
}
