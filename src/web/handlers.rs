//! Request handlers for the energy routes

use super::AppState;
use crate::error::EnergyError;
use crate::models::HourlyAggregate;
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error, warn};

/// Query string for `GET /api/energy`; the hour stays raw so bad values can fall back
#[derive(Debug, Default, Deserialize)]
pub struct EnergyQuery {
    pub hour: Option<String>,
}

impl EnergyQuery {
    /// Build from raw query pairs; a repeated `hour` keeps its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let hour = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "hour").then_some(value));
        Self { hour }
    }
}

/// Response for `POST /api/energy`
#[derive(Debug, Serialize)]
pub struct WriteResponse {
    pub success: bool,
    pub data: HourlyAggregate,
}

/// Response for `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub override_active: bool,
    pub csv_path: String,
}

impl IntoResponse for EnergyError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub async fn get_energy(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<HourlyAggregate> {
    let query = EnergyQuery::from_pairs(pairs);
    debug!("Energy requested for hour {:?}", query.hour);
    Json(state.service.read_now(query.hour.as_deref()).await)
}

pub async fn post_energy(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<WriteResponse>, EnergyError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected override payload: {}", rejection.body_text());
        EnergyError::invalid_payload(rejection.body_text())
    })?;

    let data = state.service.write(&payload)?;
    Ok(Json(WriteResponse {
        success: true,
        data,
    }))
}

pub async fn delete_energy(State(state): State<AppState>) -> Json<Value> {
    let cleared = state.service.clear_override().is_some();
    Json(json!({ "success": true, "cleared": cleared }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        override_active: state.service.override_active(),
        csv_path: state.service.csv_path().display().to_string(),
    })
}
