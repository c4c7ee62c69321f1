use axum::{routing::get, Json, Router};
use shared_types::{AppConfig, AppError};

/// Client configuration: feature flags and simulation timings.
pub async fn get_config() -> Result<Json<AppConfig>, AppError> {
    let config = crate::config::app_config()?;
    Ok(Json(config.clone()))
}

/// REST routes served next to the Dioxus app.
pub fn rest_router() -> Router {
    Router::new()
        .route("/health", get(crate::health::health_check))
        .route("/api/v1/config", get(get_config))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
