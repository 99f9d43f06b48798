use async_trait::async_trait;
use serde::Deserialize;

use enrollsync_core::catalog::Course;
use enrollsync_core::storage::{CourseRepository, Page, PaginationMeta, Result};

use super::UpstreamClient;

/// Body of `GET /v1/courses`.
#[derive(Debug, Deserialize)]
struct CoursesResponse {
    courses: Vec<Course>,
    meta: PaginationMeta,
}

impl From<CoursesResponse> for Page<Course> {
    fn from(response: CoursesResponse) -> Self {
        Page {
            items: response.courses,
            meta: response.meta,
        }
    }
}

#[async_trait]
impl CourseRepository for UpstreamClient {
    async fn get_courses(&self) -> Result<Vec<Course>> {
        self.fetch_all::<CoursesResponse, Course>("Courses", "/v1/courses")
            .await
    }
}
