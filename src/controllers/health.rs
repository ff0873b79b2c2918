use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::content::ContentRepository;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probes the content backend with the cheapest call it has.
pub async fn health_ready(
    State(content): State<Arc<dyn ContentRepository>>,
) -> impl IntoResponse {
    match content.fetch_categories().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "content_api": "connected"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "content_api": "disconnected"
            })),
        ),
    }
}
