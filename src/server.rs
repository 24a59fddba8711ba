//! HTTP 服务组装与启动

use anyhow::{anyhow, Context, Result};
use axum::{middleware, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::app::{
    self,
    product::{handler::AppState, repository::ProductRepository, service::ProductService},
};
use crate::config::{Config, DatabaseConfig, HttpConfig, StorageBackend};
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::{
    database::DatabaseManager, memory_repository::InMemoryProductRepository,
    sqlite_repository::SqliteProductRepository,
};

/// 按配置选择存储后端
pub async fn build_repository(config: &DatabaseConfig) -> Result<Arc<dyn ProductRepository>> {
    let repository: Arc<dyn ProductRepository> = match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryProductRepository::new()),
        StorageBackend::Sqlite => {
            let manager = DatabaseManager::new(config)
                .await
                .context("无法连接数据库")?;
            Arc::new(SqliteProductRepository::new(manager.get_pool().clone()))
        }
    };
    info!("存储后端: {}", repository.backend());
    Ok(repository)
}

pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository = build_repository(&config.database).await?;
    let product_service =
        ProductService::new(repository).with_read_check(config.catalog.reject_free_on_read);

    if config.database.seed_sample_data {
        product_service
            .seed_sample_data()
            .await
            .map_err(|err| anyhow!("写入示例商品失败: {:?}", err))?;
    }

    Ok(AppState {
        product_service,
        public_host: config.http.public_host.clone(),
    })
}

/// 路由加上 CORS、追踪、超时和请求日志中间件
pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    app::routes(state)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let app = build_router(state, &config.http);

    let addr = format!("{}:{}", config.http.bind_address, config.http.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 商品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products              - 获取所有商品");
    info!("   GET    /products/:id          - 获取特定商品");
    info!("   GET    /products/sorted       - 按名称排序");
    info!("   GET    /products/margin       - 商品利润表");
    info!("   GET    /products/margins      - 商品利润列表");
    info!("   GET    /products/above/:price - 售价高于指定值的商品");
    info!("   PUT    /products              - 创建商品");
    info!("   POST   /products              - 更新商品");
    info!("   DELETE /products/:id          - 删除商品");
    info!("   GET    /health                - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到退出信号，正在关闭...");
    }
}
