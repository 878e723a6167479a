use super::TransitionPolicy;
use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, MAX_MONEY, NewOrder, NewOrderItem, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{OrderDetail, OrderStatus, Product},
    utils::{Method, ServiceTracker, TracingContext},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    product_query: DynProductQueryRepository,
    policy: TransitionPolicy,
    tracker: ServiceTracker,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub policy: TransitionPolicy,
}

impl OrderCommandService {
    pub async fn new(deps: OrderCommandServiceDeps, registry: &Arc<Mutex<Registry>>) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            product_query,
            policy,
        } = deps;

        let tracker =
            ServiceTracker::new("order-command-service", "OrderCommandService", registry).await;

        Self {
            query,
            command,
            product_query,
            policy,
            tracker,
        }
    }

    /// Snapshots each item's effective price; every referenced product must exist.
    fn price_items(
        req: &CreateOrderRequest,
        products: &HashMap<Uuid, Product>,
    ) -> Result<(Vec<NewOrderItem>, Decimal), ServiceError> {
        let missing: Vec<String> = req
            .items
            .iter()
            .filter(|item| !products.contains_key(&item.product_id))
            .map(|item| format!("Product not found: {}", item.product_id))
            .collect();

        if !missing.is_empty() {
            return Err(ServiceError::Validation(missing));
        }

        let mut total = Decimal::ZERO;
        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let Some(product) = products.get(&item.product_id) else {
                continue;
            };
            let price = product.effective_price();

            total = price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line| total.checked_add(line))
                .filter(|total| *total <= MAX_MONEY)
                .ok_or_else(|| {
                    ServiceError::Validation(vec![format!(
                        "Order total exceeds the maximum of {MAX_MONEY}"
                    )])
                })?;

            items.push(NewOrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price,
            });
        }

        Ok((items, total))
    }

    async fn load(&self, id: Uuid) -> Result<OrderDetail, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))
    }

    fn check_transition(&self, from: OrderStatus, to: OrderStatus) -> Result<(), ServiceError> {
        if self.policy.permits(from, to) {
            Ok(())
        } else {
            warn!("⚠️ Rejected order transition {from} -> {to}");
            Err(ServiceError::InvalidTransition { from, to })
        }
    }

    fn fail(&self, tracing_ctx: &TracingContext, method: Method, err: &ServiceError) {
        self.tracker
            .complete_tracing_error(tracing_ctx, method, &err.to_string());
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!(
            "🛒 Creating order | items: {}, user: {:?}",
            req.items.len(),
            req.user_id
        );

        let method = Method::Post;
        let tracing_ctx = self.tracker.start_tracing(
            "create_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.items", req.items.len() as i64),
            ],
        );

        let mut ids: Vec<Uuid> = req.items.iter().map(|item| item.product_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let products = match self.product_query.find_by_ids(&ids).await {
            Ok(products) => products
                .into_iter()
                .map(|product| (product.id, product))
                .collect::<HashMap<_, _>>(),
            Err(err) => {
                error!("❌ Failed to load products for order: {err:?}");
                let err = ServiceError::Repo(err);
                self.fail(&tracing_ctx, method, &err);
                return Err(err);
            }
        };

        let (items, total) = match Self::price_items(req, &products) {
            Ok(priced) => priced,
            Err(err) => {
                self.fail(&tracing_ctx, method, &err);
                return Err(err);
            }
        };

        let new_order = NewOrder {
            user_id: req.user_id,
            items,
            total,
            shipping_address: req.shipping_address.clone(),
        };

        let order = match self.command.create_order(&new_order).await {
            Ok(order) => order,
            Err(RepositoryError::ForeignKey(_)) => {
                let user_id = req.user_id.map(|id| id.to_string()).unwrap_or_default();
                let err = ServiceError::Validation(vec![format!("User not found: {user_id}")]);
                self.fail(&tracing_ctx, method, &err);
                return Err(err);
            }
            Err(err) => {
                error!("❌ Failed to create order: {err:?}");
                let err = ServiceError::Repo(err);
                self.fail(&tracing_ctx, method, &err);
                return Err(err);
            }
        };

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Order created");

        info!("✅ Order created: {} total {}", order.order.id, order.order.total);

        Ok(ApiResponse::success(
            "Order created successfully",
            OrderResponse::from(order),
        ))
    }

    async fn update_order(
        &self,
        id: Uuid,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracker.start_tracing(
            "update_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = async {
            let mut detail = self.load(id).await?;

            if let Some(status) = req.status {
                self.check_transition(detail.order.status, status)?;
                detail.order = self
                    .command
                    .update_status(id, status)
                    .await
                    .map_err(|err| ServiceError::Repo(err).or_not_found("Order not found"))?;
            }

            if let Some(address) = &req.shipping_address {
                detail.order = self
                    .command
                    .update_shipping_address(id, address)
                    .await
                    .map_err(|err| ServiceError::Repo(err).or_not_found("Order not found"))?;
            }

            Ok::<_, ServiceError>(detail)
        }
        .await;

        match result {
            Ok(detail) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Order updated");
                Ok(ApiResponse::success(
                    "Order updated successfully",
                    OrderResponse::from(detail),
                ))
            }
            Err(err) => {
                error!("❌ Failed to update order {id}: {err}");
                self.fail(&tracing_ctx, method, &err);
                Err(err)
            }
        }
    }

    async fn update_order_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔄 Setting order {id} status to {status}");

        let method = Method::Patch;
        let tracing_ctx = self.tracker.start_tracing(
            "update_order_status",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
                KeyValue::new("order.status", status.as_str()),
            ],
        );

        let result = async {
            let mut detail = self.load(id).await?;
            self.check_transition(detail.order.status, status)?;

            detail.order = self
                .command
                .update_status(id, status)
                .await
                .map_err(|err| ServiceError::Repo(err).or_not_found("Order not found"))?;

            Ok::<_, ServiceError>(detail)
        }
        .await;

        match result {
            Ok(detail) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Order status updated");
                Ok(ApiResponse::success(
                    "Order status updated successfully",
                    OrderResponse::from(detail),
                ))
            }
            Err(err) => {
                error!("❌ Failed to update status of order {id}: {err}");
                self.fail(&tracing_ctx, method, &err);
                Err(err)
            }
        }
    }

    async fn delete_order(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracker.start_tracing(
            "delete_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        if let Err(err) = self.command.delete_order(id).await {
            error!("❌ Failed to delete order {id}: {err:?}");
            let err = ServiceError::Repo(err).or_not_found("Order not found");
            self.fail(&tracing_ctx, method, &err);
            return Err(err);
        }

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Order deleted");

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }
}
