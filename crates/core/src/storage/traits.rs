use async_trait::async_trait;

use crate::catalog::{Course, Enrollment, User};

use super::Result;

/// Repository for the course collection.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Gets every course, in upstream order.
    async fn get_courses(&self) -> Result<Vec<Course>>;
}

/// Repository for the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets every user, in upstream order.
    async fn get_users(&self) -> Result<Vec<User>>;
}

/// Repository for course enrollments.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Gets every enrollment of a course, in upstream order.
    async fn get_enrollments_by_course(&self, course_id: u64) -> Result<Vec<Enrollment>>;
}
