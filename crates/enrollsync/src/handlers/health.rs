//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (opens the cache connection if needed)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the cache is reachable and 503 otherwise. The courses
/// endpoint keeps working without a cache, so a 503 here means degraded
/// rather than down.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.cache.connect().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "healthy": true }))).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Cache not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "healthy": false,
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
