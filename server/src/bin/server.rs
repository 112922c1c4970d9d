use std::sync::Arc;
use tracing::info;

use launchdash_core::dashboard::{DashboardConfig, DashboardServer};
use launchdash_core::LaunchTable;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logging / tracing
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,launchdash_core=info,launchdash_server=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    // Defaults + env + optional TOML overlay
    let config = DashboardConfig::load();

    // Startup-fatal if the dataset is missing or malformed
    let table = Arc::new(LaunchTable::load(&config.data_path)?);

    info!(
        target: "launchdash_server",
        records = table.len(),
        url = %format!("http://{}", config.addr()),
        "Launch records dashboard starting"
    );

    DashboardServer::new(config, table).serve().await?;

    Ok(())
}
