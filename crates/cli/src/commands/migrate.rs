use anyhow::{Context, Result};
use shared::config::ConnectionManager;
use tracing::info;

pub async fn run() -> Result<()> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;

    info!("Connecting to database...");
    let pool = ConnectionManager::new_pool(&database_url, 1).await?;

    ConnectionManager::run_migrations(&pool).await
}
