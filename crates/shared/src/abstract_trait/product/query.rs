use crate::{
    domain::{
        requests::FindAllProducts,
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProductModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
