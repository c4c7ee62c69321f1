use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// `false` until `config::load_config` has run; the client then falls
    /// back to built-in defaults.
    pub config_loaded: bool,
    pub uptime_seconds: u64,
    pub version: String,
}

fn snapshot() -> HealthResponse {
    let config_loaded = crate::config::app_config().is_ok();
    HealthResponse {
        status: if config_loaded { "ok" } else { "degraded" }.to_string(),
        config_loaded,
        uptime_seconds: START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(snapshot())
}
