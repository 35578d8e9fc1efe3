//! Serve command: run the HTTP server until Ctrl+C

use crate::cli::args::ServeArgs;
use crate::service::EnergyService;
use crate::web::start_server;
use anyhow::Context;
use tracing::{error, info, warn};

pub async fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let config = args.apply(
        args.common
            .load_config()
            .context("Failed to load configuration")?,
    );
    config.validate()?;

    if !config.csv_path.exists() {
        warn!(
            "Energy CSV not found at {}; readings stay empty until it appears or an override is set",
            config.csv_path.display()
        );
    }

    let service = EnergyService::with_csv(&config.csv_path);
    start_server(&config, service, shutdown_signal())
        .await
        .with_context(|| format!("Energy server on {} failed", config.bind_address()))
}

/// Resolves on Ctrl+C; if the handler cannot be installed the server runs until killed
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully"),
        Err(e) => {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
