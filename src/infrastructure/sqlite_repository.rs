//! SQLite 商品仓储

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::app::product::{
    model::Product,
    repository::{ProductRepository, RepositoryError},
};

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, purchase_price FROM product ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn list_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, purchase_price FROM product ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, purchase_price FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn save(&self, product: Product) -> Result<Product, RepositoryError> {
        let saved = if product.is_persisted() {
            sqlx::query_as::<_, Product>(
                r#"
                INSERT INTO product (id, name, price, purchase_price)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    price = excluded.price,
                    purchase_price = excluded.purchase_price
                RETURNING id, name, price, purchase_price
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.purchase_price)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Product>(
                r#"
                INSERT INTO product (name, price, purchase_price)
                VALUES (?, ?, ?)
                RETURNING id, name, price, purchase_price
                "#,
            )
            .bind(&product.name)
            .bind(product.price)
            .bind(product.purchase_price)
            .fetch_one(&self.pool)
            .await?
        };

        debug!(product_id = saved.id, "保存商品");
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(product_id = id, rows = result.rows_affected(), "删除商品");
        Ok(())
    }

    async fn find_above_price(&self, threshold: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, purchase_price FROM product WHERE price > ? ORDER BY id",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::DatabaseManager;

    async fn repository() -> SqliteProductRepository {
        let manager = DatabaseManager::in_memory().await.unwrap();
        SqliteProductRepository::new(manager.get_pool().clone())
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let repository = repository().await;
        let saved = repository
            .save(Product::new(0, "Nitendo Switch", 350, 315))
            .await
            .unwrap();
        assert!(saved.is_persisted());

        let found = repository.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repository.find_by_id(58).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_by_id() {
        let repository = repository().await;
        repository
            .save(Product::new(5, "Filco", 150, 125))
            .await
            .unwrap();
        let updated = repository
            .save(Product::new(5, "Filco TKL", 160, 125))
            .await
            .unwrap();

        assert_eq!(updated.name, "Filco TKL");
        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_queries() {
        let repository = repository().await;
        repository
            .save(Product::new(0, "Nitendo Switch", 350, 315))
            .await
            .unwrap();
        repository
            .save(Product::new(0, "GameCube Controller", 30, 15))
            .await
            .unwrap();

        let sorted = repository.list_all_ordered_by_name().await.unwrap();
        assert_eq!(sorted[0].name, "GameCube Controller");
        assert_eq!(sorted[1].name, "Nitendo Switch");

        let above = repository.find_above_price(30).await.unwrap();
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].name, "Nitendo Switch");
    }

    #[tokio::test]
    async fn test_delete() {
        let repository = repository().await;
        let saved = repository
            .save(Product::new(0, "Filco", 150, 125))
            .await
            .unwrap();

        repository.delete_by_id(saved.id).await.unwrap();
        repository.delete_by_id(saved.id).await.unwrap();
        assert!(repository.list_all().await.unwrap().is_empty());
    }
}
