use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use service_core::error::AppError;

use crate::services::get_metrics;
use crate::startup::AppState;

/// Liveness probe.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": state.config.observability.service_name,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: 200 once the notification source can serve feeds.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    if state.source.is_ready() {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::ServiceUnavailable)
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
