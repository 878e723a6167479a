use crate::{
    domain::responses::{ApiResponse, OrderResponse},
    errors::{RepositoryError, ServiceError},
    model::OrderDetail,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Newest first, user resolved.
    async fn find_all(&self) -> Result<Vec<OrderDetail>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrderDetail>, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
