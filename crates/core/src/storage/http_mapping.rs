//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Internal` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use enrollsync_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("Courses", "Not Found");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Internal(_) => 500,
    }
}
