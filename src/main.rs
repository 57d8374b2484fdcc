use anyhow::Context;
use rpc_param_guard::{shared::LoggingUtils, AppConfig, HttpServer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    LoggingUtils::initialize(&config.logging.level, &config.logging.format, config.logging.structured)
        .context("Failed to initialize logging")?;

    info!("Starting RPC param guard...");

    let server = HttpServer::new(config).context("Failed to initialize server")?;
    info!("Server starting on {}", server.config().server_address());

    server.run().await.context("Server error")?;
    Ok(())
}
