use crate::{
    abstract_trait::{DynUserQueryRepository, DynUserQueryService, UserQueryServiceTrait},
    domain::responses::{ApiResponse, UserResponse},
    errors::ServiceError,
    utils::{Method, ServiceTracker},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pub query: DynUserQueryService,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("query", &"Arc<dyn UserQueryServiceTrait>")
            .finish()
    }
}

impl UserService {
    pub async fn new(query: DynUserQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let query = Arc::new(UserQueryService::new(query, registry).await) as DynUserQueryService;
        Self { query }
    }
}

struct UserQueryService {
    query: DynUserQueryRepository,
    tracker: ServiceTracker,
}

impl UserQueryService {
    async fn new(query: DynUserQueryRepository, registry: &Arc<Mutex<Registry>>) -> Self {
        let tracker =
            ServiceTracker::new("user-query-service", "UserQueryService", registry).await;

        Self { query, tracker }
    }
}

#[async_trait]
impl UserQueryServiceTrait for UserQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        info!("👥 Listing users");

        let method = Method::Get;
        let tracing_ctx = self
            .tracker
            .start_tracing("find_all_users", vec![KeyValue::new("component", "user")]);

        match self.query.find_all().await {
            Ok(users) => {
                let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
                self.tracker.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    &format!("Fetched {} users", data.len()),
                );
                Ok(ApiResponse::success("Users retrieved successfully", data))
            }
            Err(err) => {
                error!("❌ Failed to fetch users: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch users");
                Err(ServiceError::Repo(err))
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "find_user_by_id",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(user)) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "User found");
                Ok(ApiResponse::success(
                    "User retrieved successfully",
                    UserResponse::from(user),
                ))
            }
            Ok(None) => {
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "User not found");
                Err(ServiceError::NotFound("User not found".to_string()))
            }
            Err(err) => {
                error!("❌ Failed to fetch user {id}: {err:?}");
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Failed to fetch user");
                Err(ServiceError::Repo(err))
            }
        }
    }
}
