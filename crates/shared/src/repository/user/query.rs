use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User as UserModel, repository::user::USER_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC");

        let users = sqlx::query_as::<_, UserModel>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch users: {e:?}");
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} users", users.len());
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch user {id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch user by email: {e:?}");
                RepositoryError::from(e)
            })
    }
}
