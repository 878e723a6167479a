use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::FindAllProducts,
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

pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracker: ServiceTracker,
}

impl ProductQueryService {
    pub async fn new(query: DynProductQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracker =
            ServiceTracker::new("product-query-service", "ProductQueryService", registry).await;

        Self { query, tracker }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Listing products | featured: {:?}, category: {:?}, limit: {:?}",
            req.featured, req.category, req.limit
        );

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_all_products",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
                KeyValue::new("filter.featured", format!("{:?}", req.featured)),
                KeyValue::new("filter.category", req.category.clone().unwrap_or_default()),
            ],
        );

        let products = match self.query.find_all(req).await {
            Ok(products) => products,
            Err(err) => {
                error!("❌ Failed to fetch products: {err:?}");
                self.tracker.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to fetch products",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        self.tracker.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Fetched {} products", data.len()),
        );

        Ok(ApiResponse::success("Products retrieved successfully", data))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆔 Fetching product by ID: {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_product_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Product found");

                Ok(ApiResponse::success(
                    "Product retrieved successfully",
                    ProductResponse::from(product),
                ))
            }
            Ok(None) => {
                info!("ℹ️ Product not found: {id}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Product not found");
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch product {id}: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch product");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
