use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::ProductRequest,
    errors::RepositoryError,
    model::Product as ProductModel,
    repository::product::PRODUCT_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO products (id, name, description, price, discount_price, stock_quantity,
                                  images, category, subcategory, featured, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(Uuid::new_v4())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.discount_price)
            .bind(product.stock_quantity)
            .bind(&product.images)
            .bind(&product.category)
            .bind(&product.subcategory)
            .bind(product.featured)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: Uuid,
        product: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                discount_price = $5,
                stock_quantity = $6,
                images = $7,
                category = $8,
                subcategory = $9,
                featured = $10,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.discount_price)
            .bind(product.stock_quantity)
            .bind(&product.images)
            .bind(&product.category)
            .bind(&product.subcategory)
            .bind(product.featured)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated product ID {}", result.id);
        Ok(result)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted product ID {id}");
        Ok(())
    }
}
