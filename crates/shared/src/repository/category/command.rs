use crate::{
    abstract_trait::CategoryCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::NewCategory, errors::RepositoryError, model::Category as CategoryModel,
    repository::category::CATEGORY_COLUMNS,
};
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(&self, req: &NewCategory) -> Result<CategoryModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO categories (id, name, slug, description, subcategories, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {CATEGORY_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, CategoryModel>(&sql)
            .bind(Uuid::new_v4())
            .bind(&req.name)
            .bind(&req.slug)
            .bind(&req.description)
            .bind(Json(&req.subcategories))
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create category {}: {:?}", req.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created category {} ({})", result.name, result.id);
        Ok(result)
    }

    async fn update_category(
        &self,
        id: Uuid,
        req: &NewCategory,
    ) -> Result<CategoryModel, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE categories
            SET name = $2,
                slug = $3,
                description = $4,
                subcategories = $5,
                updated_at = current_timestamp
            WHERE id = $1
            RETURNING {CATEGORY_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, CategoryModel>(&sql)
            .bind(id)
            .bind(&req.name)
            .bind(&req.slug)
            .bind(&req.description)
            .bind(Json(&req.subcategories))
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update category {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        info!("🔄 Updated category {}", result.id);
        Ok(result)
    }

    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete category {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted category {id}");
        Ok(())
    }
}
