//! Router tests driven through `tower::ServiceExt::oneshot`

use super::{AppState, router};
use crate::service::{EnergyService, current_hour};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;
use tower::ServiceExt;

/// One row per hour of 11/9/2025; Solar carries the 24-hour value
fn full_day_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "BA Code,Timestamp (Hour Ending),Solar,Wind").unwrap();
    for hour in 0..24u32 {
        let (display, meridiem) = match hour {
            0 => (12, "a.m."),
            1..=11 => (hour, "a.m."),
            12 => (12, "p.m."),
            _ => (hour - 12, "p.m."),
        };
        writeln!(
            file,
            "CISO,\"11/9/2025 {display} {meridiem} EST\",{hour},\"1,000\""
        )
        .unwrap();
    }
    file
}

fn app_for(file: &NamedTempFile) -> Router {
    router(AppState::new(EnergyService::with_csv(file.path())))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/energy")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_energy_for_requested_hour() {
    let file = full_day_csv();
    let response = app_for(&file).oneshot(get("/api/energy?hour=13")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"Solar": 13, "Wind": 1000}));
}

#[tokio::test]
async fn test_repeated_hour_uses_first_value() {
    let file = full_day_csv();
    let response = app_for(&file)
        .oneshot(get("/api/energy?hour=3&hour=4"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["Solar"], json!(3));
}

#[tokio::test]
async fn test_out_of_range_hour_uses_server_hour() {
    let file = full_day_csv();
    let before = current_hour();
    let response = app_for(&file).oneshot(get("/api/energy?hour=25")).await.unwrap();
    let after = current_hour();

    assert_eq!(response.status(), StatusCode::OK);
    let solar = body_json(response).await["Solar"].as_u64().unwrap();
    assert!(solar == u64::from(before) || solar == u64::from(after));
}

#[tokio::test]
async fn test_empty_csv_returns_empty_object() {
    let file = NamedTempFile::new().unwrap();
    let response = app_for(&file).oneshot(get("/api/energy")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[tokio::test]
async fn test_override_round_trip() {
    let file = full_day_csv();
    let app = app_for(&file);

    let response = app.clone().oneshot(post_json(r#"{"solar": 100}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"success": true, "data": {"solar": 100}})
    );

    for uri in ["/api/energy", "/api/energy?hour=3", "/api/energy?hour=22"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(body_json(response).await, json!({"solar": 100}));
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/energy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(body_json(response).await["cleared"], json!(true));

    let response = app.oneshot(get("/api/energy?hour=3")).await.unwrap();
    assert_eq!(body_json(response).await["Solar"], json!(3));
}

#[tokio::test]
async fn test_array_payload_rejected_without_state_change() {
    let file = full_day_csv();
    let app = app_for(&file);

    let response = app.clone().oneshot(post_json("[1, 2, 3]")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(body_json(response).await["override_active"], json!(false));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let file = full_day_csv();
    let response = app_for(&file).oneshot(post_json("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_health_reports_csv_path() {
    let file = full_day_csv();
    let response = app_for(&file).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["csv_path"], json!(file.path().display().to_string()));
}

#[tokio::test]
async fn test_bind_failure_is_server_error() {
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = crate::config::AppConfig {
        port: occupied.local_addr().unwrap().port(),
        ..Default::default()
    };

    let err = super::start_server(&config, EnergyService::with_csv("unused.csv"), async {})
        .await
        .unwrap_err();
    assert!(matches!(err, crate::error::EnergyError::Server { .. }));
}
