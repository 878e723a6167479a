use crate::{
    domain::{
        requests::ProductRequest,
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &ProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: Uuid,
        req: &ProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update_product(
        &self,
        id: Uuid,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
