//! 商品存储边界

use async_trait::async_trait;
use thiserror::Error;

use super::model::Product;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("商品 id 已耗尽")]
    IdSpaceExhausted,
}

/// 商品仓储
///
/// 每个调用在单行级别上原子，并发写同一 id 时后写者生效。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 全部商品，不保证顺序
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// 按名称升序
    async fn list_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError>;

    /// `id` 未设置时插入并分配 id，否则覆盖（不存在则以该 id 插入）
    async fn save(&self, product: Product) -> Result<Product, RepositoryError>;

    /// 删除不存在的 id 不是错误
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// 售价严格大于 `threshold` 的商品
    async fn find_above_price(&self, threshold: i64) -> Result<Vec<Product>, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;

    /// 存储类型名称，用于健康检查
    fn backend(&self) -> &'static str;
}
