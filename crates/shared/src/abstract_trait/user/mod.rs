use crate::{
    domain::{
        requests::NewUser,
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;
pub type DynUserQueryService = Arc<dyn UserQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &NewUser) -> Result<UserModel, RepositoryError>;
}

#[async_trait]
pub trait UserQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<UserResponse>, ServiceError>;
}
