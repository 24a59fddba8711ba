//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // 内存库每个连接各自独立，只能用单连接
        let max_connections = if config.url.contains(":memory:") {
            1
        } else {
            config.max_connections
        };

        info!("连接数据库: {}", config.url);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        create_tables(&pool).await?;

        Ok(Self { pool })
    }

    /// 单连接内存库，主要用于测试
    pub async fn in_memory() -> Result<Self, Error> {
        Self::new(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        })
        .await
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn create_tables(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price INTEGER NOT NULL,
            purchase_price INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("数据表已就绪");
    Ok(())
}
