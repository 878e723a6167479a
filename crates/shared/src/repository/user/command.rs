use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::NewUser, errors::RepositoryError, model::User as UserModel,
    repository::user::USER_COLUMNS,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &NewUser) -> Result<UserModel, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO users (id, name, email, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(Uuid::new_v4())
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.password_hash)
            .bind(req.role)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create user {}: {:?}", req.email, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created user {} with role {}", user.id, user.role);
        Ok(user)
    }
}
