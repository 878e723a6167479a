use crate::{
    domain::{
        requests::{CreateOrderRequest, NewOrder, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderDetail, OrderStatus, ShippingAddress},
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and all of its items atomically.
    async fn create_order(&self, req: &NewOrder) -> Result<OrderDetail, RepositoryError>;
    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, RepositoryError>;
    async fn update_shipping_address(
        &self,
        id: Uuid,
        address: &ShippingAddress,
    ) -> Result<Order, RepositoryError>;
    async fn delete_order(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: Uuid,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
