use super::MemoryStore;
use crate::{
    abstract_trait::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    domain::requests::NewUser,
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.state.read().await.users.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn create_user(&self, req: &NewUser) -> Result<User, RepositoryError> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            email: req.email.clone(),
            password: req.password_hash.clone(),
            role: req.role,
            created_at: now,
            updated_at: now,
        };

        state.users.push(user.clone());
        Ok(user)
    }
}
