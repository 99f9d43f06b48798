use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur during repository operations.
///
/// Callers only ever see these two kinds; every other failure is folded into
/// `Internal` before it leaves a repository or the aggregation service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{resource} not found: {reason}")]
    NotFound {
        resource: &'static str,
        reason: String,
    },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    pub fn not_found(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<CatalogError> for RepositoryError {
    fn from(err: CatalogError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
