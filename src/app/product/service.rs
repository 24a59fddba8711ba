//! 商品业务服务

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use super::{
    margin::{margin_entries, margin_report},
    model::Product,
    repository::ProductRepository,
    rules,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    reject_free_on_read: bool,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            repository,
            reject_free_on_read: false,
        }
    }

    /// 读取时也对已存储的商品检查售价规则
    pub fn with_read_check(mut self, enabled: bool) -> Self {
        self.reject_free_on_read = enabled;
        self
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        let products = self.repository.list_all().await?;
        if self.reject_free_on_read {
            products.iter().try_for_each(rules::validate)?;
        }
        debug!("获取到 {} 个商品", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, CoreError> {
        let product = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("商品 {} 不存在", id);
            CoreError::NotFound(format!("商品 {} 不存在", id))
        })?;
        if self.reject_free_on_read {
            rules::validate(&product)?;
        }
        Ok(product)
    }

    pub async fn list_sorted(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.repository.list_all_ordered_by_name().await?)
    }

    pub async fn margin_report(&self) -> Result<BTreeMap<String, i64>, CoreError> {
        let products = self.repository.list_all().await?;
        Ok(margin_report(&products))
    }

    pub async fn margin_entries(&self) -> Result<Vec<BTreeMap<String, i64>>, CoreError> {
        let products = self.repository.list_all().await?;
        Ok(margin_entries(&products))
    }

    pub async fn list_above(&self, threshold: i64) -> Result<Vec<Product>, CoreError> {
        Ok(self.repository.find_above_price(threshold).await?)
    }

    /// 创建商品，请求中的 id 会被忽略
    pub async fn create_product(&self, mut product: Product) -> Result<Product, CoreError> {
        product.validate()?;
        rules::validate(&product)?;

        product.id = 0;
        let saved = self.repository.save(product).await?;
        info!("创建商品: {} ({})", saved.name, saved.id);
        Ok(saved)
    }

    /// 覆盖指定 id 的商品；id 不存在时按该 id 插入
    pub async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        product.validate()?;
        if !product.is_persisted() {
            return Err(CoreError::BadRequest("更新商品时必须提供有效的 id".to_string()));
        }
        rules::validate(&product)?;

        let saved = self.repository.save(product).await?;
        info!("更新商品: {} ({})", saved.name, saved.id);
        Ok(saved)
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), CoreError> {
        self.repository.delete_by_id(id).await?;
        info!("删除商品: {}", id);
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, CoreError> {
        Ok(self.repository.count().await?)
    }

    /// 存储为空时写入示例商品
    pub async fn seed_sample_data(&self) -> Result<(), CoreError> {
        if self.repository.count().await? > 0 {
            info!("存储中已有商品，跳过示例数据");
            return Ok(());
        }

        let samples = vec![
            Product::new(0, "Nitendo Switch", 350, 315),
            Product::new(0, "GameCube Controller", 30, 15),
        ];
        for product in samples {
            self.repository.save(product).await?;
        }

        info!("✅ 已初始化示例商品");
        Ok(())
    }
}
