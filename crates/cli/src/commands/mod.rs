pub mod cart;
pub mod migrate;
pub mod seed;

use anyhow::{Context, Result};
use shared::{config::Config, state::AppState};

/// Builds the same service graph the server uses.
pub async fn app_state() -> Result<AppState> {
    let config = Config::init().context("Failed to load configuration")?;
    AppState::new(&config).await
}
