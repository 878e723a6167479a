use crate::{
    domain::{
        requests::{CategoryRequest, NewCategory},
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Category as CategoryModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(&self, req: &NewCategory) -> Result<CategoryModel, RepositoryError>;
    async fn update_category(
        &self,
        id: Uuid,
        req: &NewCategory,
    ) -> Result<CategoryModel, RepositoryError>;
    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
