use crate::{
    abstract_trait::{CategoryQueryServiceTrait, DynCategoryQueryRepository},
    domain::responses::{ApiResponse, CategoryResponse},
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

pub struct CategoryQueryService {
    query: DynCategoryQueryRepository,
    tracker: ServiceTracker,
}

impl CategoryQueryService {
    pub async fn new(query: DynCategoryQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracker =
            ServiceTracker::new("category-query-service", "CategoryQueryService", registry).await;

        Self { query, tracker }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        info!("📚 Listing categories");

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_all_categories",
            vec![KeyValue::new("component", "category")],
        );

        let categories = match self.query.find_all().await {
            Ok(categories) => categories,
            Err(err) => {
                error!("❌ Failed to fetch categories: {err:?}");
                self.tracker.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to fetch categories",
                );
                return Err(ServiceError::Repo(err));
            }
        };

        let data: Vec<CategoryResponse> =
            categories.into_iter().map(CategoryResponse::from).collect();

        self.tracker.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Fetched {} categories", data.len()),
        );

        Ok(ApiResponse::success("Categories retrieved successfully", data))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_category_by_id",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(category)) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Category found");
                Ok(ApiResponse::success(
                    "Category retrieved successfully",
                    CategoryResponse::from(category),
                ))
            }
            Ok(None) => {
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Category not found");
                Err(ServiceError::NotFound("Category not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch category {id}: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch category");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        info!("🔎 Looking up category by slug '{slug}'");

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_category_by_slug",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.slug", slug.to_string()),
            ],
        );

        match self.query.find_by_slug(slug).await {
            Ok(Some(category)) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Category found");
                Ok(ApiResponse::success(
                    "Category retrieved successfully",
                    CategoryResponse::from(category),
                ))
            }
            Ok(None) => {
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Category not found");
                Err(ServiceError::NotFound("Category not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch category by slug '{slug}': {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch category");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
