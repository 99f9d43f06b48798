use async_trait::async_trait;
use serde::Deserialize;

use enrollsync_core::catalog::Enrollment;
use enrollsync_core::storage::{EnrollmentRepository, Page, PaginationMeta, Result};

use super::UpstreamClient;

/// Body of `GET /v1/courses/{id}/enrollments`.
#[derive(Debug, Deserialize)]
struct EnrollmentsResponse {
    enrollments: Vec<Enrollment>,
    meta: PaginationMeta,
}

impl From<EnrollmentsResponse> for Page<Enrollment> {
    fn from(response: EnrollmentsResponse) -> Self {
        Page {
            items: response.enrollments,
            meta: response.meta,
        }
    }
}

#[async_trait]
impl EnrollmentRepository for UpstreamClient {
    async fn get_enrollments_by_course(&self, course_id: u64) -> Result<Vec<Enrollment>> {
        let path = format!("/v1/courses/{}/enrollments", course_id);
        self.fetch_all::<EnrollmentsResponse, Enrollment>("Enrollments", &path)
            .await
    }
}
