use thiserror::Error;

/// Errors raised while joining courses, users and enrollments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Enrollment in course {course_id} references unknown user {user_id}")]
    UnknownUser { course_id: u64, user_id: u64 },
}
