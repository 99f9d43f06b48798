use axum::{extract::State, Json};
use serde::Serialize;

use enrollsync_core::catalog::CourseWithEnrollments;

use crate::{handlers::AppError, state::AppState};

/// Success envelope for the courses endpoint.
#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub success: bool,
    pub data: Vec<CourseWithEnrollments>,
}

/// List published courses with their enrolled students (GET /v1/courses).
#[axum::debug_handler]
pub async fn list_published_courses(
    State(state): State<AppState>,
) -> Result<Json<CoursesResponse>, AppError> {
    let data = state.service.execute().await?;

    tracing::info!(courses = data.len(), "Served published courses");

    Ok(Json(CoursesResponse {
        success: true,
        data,
    }))
}
