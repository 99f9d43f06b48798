//! Cached enrollment repository decorator.
//!
//! Each course's enrollments are cached under their own key, so a hit for
//! one course says nothing about another.

use std::sync::Arc;

use async_trait::async_trait;

use enrollsync_core::cache::{enrollments_key, Cache};
use enrollsync_core::catalog::Enrollment;
use enrollsync_core::storage::{EnrollmentRepository, Result};

use super::{read_cached, write_cached};

/// Cached enrollment repository decorator.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedEnrollmentRepository<R, C>
where
    R: EnrollmentRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedEnrollmentRepository<R, C>
where
    R: EnrollmentRepository,
    C: Cache,
{
    /// Creates a new cached enrollment repository.
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R, C> EnrollmentRepository for CachedEnrollmentRepository<R, C>
where
    R: EnrollmentRepository + 'static,
    C: Cache + 'static,
{
    async fn get_enrollments_by_course(&self, course_id: u64) -> Result<Vec<Enrollment>> {
        let cache_key = enrollments_key(course_id);

        if let Some(enrollments) = read_cached(self.cache.as_ref(), &cache_key).await {
            tracing::trace!(course_id, count = enrollments.len(), "Cache hit for enrollments");
            return Ok(enrollments);
        }

        tracing::trace!(course_id, "Cache miss for enrollments");
        let enrollments = self.repository.get_enrollments_by_course(course_id).await?;
        write_cached(self.cache.as_ref(), &cache_key, &enrollments).await;

        Ok(enrollments)
    }
}
