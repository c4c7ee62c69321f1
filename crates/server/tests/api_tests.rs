//! Integration tests for the REST routes.
//!
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, test_app};
use pretty_assertions::assert_eq;
use shared_types::{AppConfig, SimulationConfig};

#[tokio::test]
async fn health_check_returns_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["config_loaded"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn config_route_serves_checked_in_file() {
    let app = test_app();
    let (status, body) = get(&app, "/api/v1/config").await;

    assert_eq!(status, StatusCode::OK);
    let config: AppConfig = serde_json::from_str(&body).unwrap();
    assert!(config.features.social_login);
    assert!(config.features.manual_court_selection);
    assert_eq!(config.simulation, SimulationConfig::default());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = test_app();
    let (status, _) = get(&app, "/api/v1/videos").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
