use crate::{
    domain::responses::{ApiResponse, CategoryResponse},
    errors::{RepositoryError, ServiceError},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryModel>, RepositoryError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<CategoryModel>, RepositoryError>;
}

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}
