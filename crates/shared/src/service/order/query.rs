use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
    utils::{Method, ServiceTracker},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracker: ServiceTracker,
}

impl OrderQueryService {
    pub async fn new(query: DynOrderQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracker =
            ServiceTracker::new("order-query-service", "OrderQueryService", registry).await;

        Self { query, tracker }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("📦 Listing orders");

        let method = Method::Get;
        let tracing_ctx = self
            .tracker
            .start_tracing("find_all_orders", vec![KeyValue::new("component", "order")]);

        let orders = match self.query.find_all().await {
            Ok(orders) => orders,
            Err(err) => {
                error!("❌ Failed to fetch orders: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch orders");
                return Err(ServiceError::Repo(err));
            }
        };

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

        self.tracker.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Fetched {} orders", data.len()),
        );

        Ok(ApiResponse::success("Orders retrieved successfully", data))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🆔 Fetching order by ID: {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_order_by_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(order)) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Order found");
                Ok(ApiResponse::success(
                    "Order retrieved successfully",
                    OrderResponse::from(order),
                ))
            }
            Ok(None) => {
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Order not found");
                Err(ServiceError::NotFound("Order not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch order {id}: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch order");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
