use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, LoginResponse, UserResponse},
    },
    errors::ServiceError,
    model::UserRole,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    /// Registers a customer account.
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    /// Registers an account with an explicit role; used for seeding administrators.
    async fn register_with_role(
        &self,
        req: &RegisterRequest,
        role: UserRole,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError>;
    async fn get_me(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
