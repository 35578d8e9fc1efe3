//! HTTP surface for the energy service.
//!
//! Routes:
//! - `GET /api/energy?hour=N` - aggregate for an hour (override first)
//! - `POST /api/energy` - replace the override slot with a JSON object
//! - `DELETE /api/energy` - clear the override slot
//! - `GET /health` - liveness and override status

mod handlers;

#[cfg(test)]
mod tests;

pub use handlers::{EnergyQuery, HealthResponse, WriteResponse};

use crate::config::AppConfig;
use crate::error::{EnergyError, Result};
use crate::service::EnergyService;
use axum::{Router, routing::get};
use std::future::Future;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state for web handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: EnergyService,
}

impl AppState {
    pub fn new(service: EnergyService) -> Self {
        Self { service }
    }
}

/// Build the router with all energy routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/energy",
            get(handlers::get_energy)
                .post(handlers::post_energy)
                .delete(handlers::delete_energy),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves
///
/// # Errors
/// Returns error if the listener fails to bind or the server fails while serving
pub async fn start_server<F>(config: &AppConfig, service: EnergyService, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EnergyError::server(format!("Failed to bind {addr}: {e}")))?;

    info!("Starting energy server on http://{}", addr);
    info!("Reading energy data from {}", service.csv_path().display());

    axum::serve(listener, router(AppState::new(service)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| EnergyError::server(e.to_string()))?;

    info!("Energy server stopped");
    Ok(())
}
