use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        courses::list_published_courses,
        health::{livez, readyz},
    },
    state::AppState,
};

/// Builds the router.
///
/// Requests running longer than `request_timeout` are dropped and answered
/// with 408; dropping the handler future cancels any upstream fetch in flight.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    let api_routes = Router::new().route("/courses", get(list_published_courses));

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
