use crate::{
    abstract_trait::{CategoryCommandServiceTrait, DynCategoryCommandRepository},
    domain::{
        requests::{CategoryRequest, NewCategory},
        responses::{ApiResponse, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracker},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

fn duplicate_slug(err: ServiceError) -> ServiceError {
    match err {
        ServiceError::Repo(RepositoryError::AlreadyExists(_)) => {
            ServiceError::AlreadyExists("Category already exists".to_string())
        }
        other => other,
    }
}

pub struct CategoryCommandService {
    command: DynCategoryCommandRepository,
    tracker: ServiceTracker,
}

impl CategoryCommandService {
    pub async fn new(
        command: DynCategoryCommandRepository,
        registry: &Arc<Mutex<Registry>>,
    ) -> Self {
        let tracker =
            ServiceTracker::new("category-command-service", "CategoryCommandService", registry)
                .await;

        Self { command, tracker }
    }
}

#[async_trait]
impl CategoryCommandServiceTrait for CategoryCommandService {
    async fn create_category(
        &self,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = NewCategory::from(req);
        info!("🏗️ Creating category: {} ({})", category.name, category.slug);

        let method = Method::Post;
        let tracing_ctx = self.tracker.start_tracing(
            "create_category",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.slug", category.slug.clone()),
            ],
        );

        let created = match self.command.create_category(&category).await {
            Ok(created) => created,
            Err(err) => {
                error!("❌ Failed to create category '{}': {err:?}", category.name);
                self.tracker.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to create category",
                );
                return Err(duplicate_slug(err.into()));
            }
        };

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Category created");

        Ok(ApiResponse::success(
            "Category created successfully",
            CategoryResponse::from(created),
        ))
    }

    async fn update_category(
        &self,
        id: Uuid,
        req: &CategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError> {
        let category = NewCategory::from(req);
        info!("✏️ Updating category {id}");

        let method = Method::Put;
        let tracing_ctx = self.tracker.start_tracing(
            "update_category",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        let updated = match self.command.update_category(id, &category).await {
            Ok(updated) => updated,
            Err(err) => {
                error!("❌ Failed to update category {id}: {err:?}");
                self.tracker.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    "Failed to update category",
                );
                return Err(duplicate_slug(err.into()).or_not_found("Category not found"));
            }
        };

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Category updated");

        Ok(ApiResponse::success(
            "Category updated successfully",
            CategoryResponse::from(updated),
        ))
    }

    async fn delete_category(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting category {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracker.start_tracing(
            "delete_category",
            vec![
                KeyValue::new("component", "category"),
                KeyValue::new("category.id", id.to_string()),
            ],
        );

        if let Err(err) = self.command.delete_category(id).await {
            error!("❌ Failed to delete category {id}: {err:?}");
            self.tracker
                .complete_tracing_error(&tracing_ctx, method, "Failed to delete category");
            return Err(ServiceError::Repo(err).or_not_found("Category not found"));
        }

        self.tracker
            .complete_tracing_success(&tracing_ctx, method, "Category deleted");

        Ok(ApiResponse::success("Category deleted successfully", ()))
    }
}
