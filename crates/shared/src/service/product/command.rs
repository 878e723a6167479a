use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::ProductRequest,
        responses::{ApiResponse, ProductResponse},
    },
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

pub struct ProductCommandService {
    command: DynProductCommandRepository,
    tracker: ServiceTracker,
}

impl ProductCommandService {
    pub async fn new(
        command: DynProductCommandRepository,
        registry: &Arc<Mutex<Registry>>,
    ) -> Self {
        let tracker =
            ServiceTracker::new("product-command-service", "ProductCommandService", registry)
                .await;

        Self { command, tracker }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracker.start_tracing(
            "create_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", req.name.clone()),
                KeyValue::new("product.category", req.category.clone()),
            ],
        );

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(err) => {
                error!("❌ Failed to create product '{}': {err:?}", req.name);
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to create product");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Product created");

        info!("✅ Product created: {} (ID: {})", product.name, product.id);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        id: Uuid,
        req: &ProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("✏️ Updating product {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracker.start_tracing(
            "update_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let product = match self.command.update_product(id, req).await {
            Ok(product) => product,
            Err(err) => {
                error!("❌ Failed to update product {id}: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to update product");
                return Err(ServiceError::Repo(err).or_not_found("Product not found"));
            }
        };

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Product updated");

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn delete_product(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracker.start_tracing(
            "delete_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        if let Err(err) = self.command.delete_product(id).await {
            error!("❌ Failed to delete product {id}: {err:?}");
            self.tracker
                .complete_tracing_error(&tracing_ctx, method, "Failed to delete product");
            return Err(ServiceError::Repo(err).or_not_found("Product not found"));
        }

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Product deleted");

        Ok(ApiResponse::success("Product deleted successfully", ()))
    }
}
