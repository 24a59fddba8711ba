//! 内存商品仓储

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::app::product::{
    model::Product,
    repository::{ProductRepository, RepositoryError},
};

#[derive(Debug)]
struct Store {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

/// 以 id 排序的内存存储，id 单调递增
#[derive(Debug)]
pub struct InMemoryProductRepository {
    store: Mutex<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn list_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.list_all().await?;
        products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, RepositoryError> {
        let mut store = self.store.lock().await;

        if product.is_persisted() {
            store.next_id = store.next_id.max(product.id.saturating_add(1));
        } else {
            if store.rows.contains_key(&store.next_id) {
                return Err(RepositoryError::IdSpaceExhausted);
            }
            product.id = store.next_id;
            store.next_id = store.next_id.saturating_add(1);
        }

        debug!(product_id = product.id, "保存商品");
        store.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.lock().await;
        if store.rows.remove(&id).is_none() {
            debug!(product_id = id, "删除的商品不存在");
        }
        Ok(())
    }

    async fn find_above_price(&self, threshold: i64) -> Result<Vec<Product>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .rows
            .values()
            .filter(|product| product.price > threshold)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.rows.len() as i64)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
