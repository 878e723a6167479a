use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::Config,
    state::AppState,
    utils::{Telemetry, init_logger},
};
use storefront::handler::AppRouter;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = Telemetry::init("storefront", config.otel_endpoint.as_deref())
        .context("Failed to initialise telemetry")?;

    let _log_guard = init_logger(
        telemetry.logger_provider(),
        "storefront",
        config.dev_mode,
        config.enable_file_log,
    );

    let state = AppState::new(&config)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    telemetry.shutdown()?;

    Ok(())
}
