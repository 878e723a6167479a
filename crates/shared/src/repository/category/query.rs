use crate::{
    abstract_trait::CategoryQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Category as CategoryModel,
    repository::category::CATEGORY_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY seq ASC");

        let categories = sqlx::query_as::<_, CategoryModel>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch categories: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} categories", categories.len());
        Ok(categories)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryModel>, RepositoryError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");

        sqlx::query_as::<_, CategoryModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch category {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryModel>, RepositoryError> {
        let sql = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE slug = $1");

        sqlx::query_as::<_, CategoryModel>(&sql)
            .bind(slug)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch category by slug '{slug}': {e:?}");
                RepositoryError::from(e)
            })
    }
}
