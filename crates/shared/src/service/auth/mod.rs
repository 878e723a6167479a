use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    domain::{
        requests::{LoginRequest, NewUser, RegisterRequest},
        responses::{ApiResponse, LoginResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::UserRole,
    utils::{Method, ServiceTracker},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

const USER_EXISTS: &str = "User already exists";

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    tracker: ServiceTracker,
}

#[derive(Clone)]
pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl AuthService {
    pub async fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            query,
            command,
            registry,
        } = deps;

        let tracker = ServiceTracker::new("auth-service", "AuthService", &registry).await;

        Self {
            hash,
            jwt,
            query,
            command,
            tracker,
        }
    }

    async fn create_account(
        &self,
        req: &RegisterRequest,
        role: UserRole,
    ) -> Result<UserResponse, ServiceError> {
        if self.query.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::AlreadyExists(USER_EXISTS.to_string()));
        }

        let password_hash = self.hash.hash_password(&req.password).await?;

        let new_user = NewUser {
            name: req.name.trim().to_string(),
            email: req.email.clone(),
            password_hash,
            role,
        };

        match self.command.create_user(&new_user).await {
            Ok(user) => Ok(UserResponse::from(user)),
            Err(RepositoryError::AlreadyExists(_)) => {
                Err(ServiceError::AlreadyExists(USER_EXISTS.to_string()))
            }
            Err(err) => Err(ServiceError::Repo(err)),
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        self.register_with_role(req, UserRole::Customer).await
    }

    async fn register_with_role(
        &self,
        req: &RegisterRequest,
        role: UserRole,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("📝 [REGISTER] Starting user registration | Email: {}", req.email);

        let method = Method::Post;
        let tracing_ctx = self.tracker.start_tracing(
            "RegisterUser",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("user.email", req.email.clone()),
                KeyValue::new("user.role", role.as_str()),
            ],
        );

        match self.create_account(req, role).await {
            Ok(user) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "User registered");
                info!("✅ [REGISTER] User created | ID: {}", user.id);
                Ok(ApiResponse::success("User created successfully", user))
            }
            Err(err) => {
                match &err {
                    ServiceError::AlreadyExists(_) => {
                        warn!("⚠️ [REGISTER] Email already registered: {}", req.email)
                    }
                    other => error!("❌ [REGISTER] Failed to register {}: {other}", req.email),
                }
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, &err.to_string());
                Err(err)
            }
        }
    }

    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        info!("🔐 [LOGIN] Attempt | Email: {}", req.email);

        let method = Method::Post;
        let tracing_ctx = self.tracker.start_tracing(
            "LoginUser",
            vec![
                KeyValue::new("component", "auth"),
                KeyValue::new("user.email", req.email.clone()),
            ],
        );

        let result = async {
            let user = self
                .query
                .find_by_email(&req.email)
                .await?
                .ok_or(ServiceError::InvalidCredentials)?;

            self.hash
                .compare_password(&user.password, &req.password)
                .await
                .map_err(|err| match err {
                    ServiceError::Bcrypt(_) => ServiceError::InvalidCredentials,
                    other => other,
                })?;

            let token = self.jwt.generate_token(user.id, user.role)?;

            Ok::<_, ServiceError>(LoginResponse {
                token,
                user: UserResponse::from(user),
            })
        }
        .await;

        match result {
            Ok(login) => {
                self.tracker
                    .complete_tracing_success(&tracing_ctx, method, "Login successful");
                info!("✅ [LOGIN] Success | ID: {}", login.user.id);
                Ok(ApiResponse::success("Login successful", login))
            }
            Err(err) => {
                warn!("🚫 [LOGIN] Rejected | Email: {} | {err}", req.email);
                self.tracker
                    .complete_tracing_error(&tracing_ctx, method, "Login failed");
                Err(err)
            }
        }
    }

    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Fetching current user {id}");

        let method = Method::Get;
        let tracing_ctx = self.tracker.start_tracing(
            "GetMe",
            vec![
                KeyValue::new("component", "auth"),
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
