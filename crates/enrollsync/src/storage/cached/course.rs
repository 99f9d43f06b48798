//! Cached course repository decorator.
//!
//! Wraps a `CourseRepository` implementation with the cache-aside pattern.

use std::sync::Arc;

use async_trait::async_trait;

use enrollsync_core::cache::{courses_key, Cache};
use enrollsync_core::catalog::Course;
use enrollsync_core::storage::{CourseRepository, Result};

use super::{read_cached, write_cached};

/// Cached course repository decorator.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedCourseRepository<R, C>
where
    R: CourseRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedCourseRepository<R, C>
where
    R: CourseRepository,
    C: Cache,
{
    /// Creates a new cached course repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R, C> CourseRepository for CachedCourseRepository<R, C>
where
    R: CourseRepository + 'static,
    C: Cache + 'static,
{
    async fn get_courses(&self) -> Result<Vec<Course>> {
        let cache_key = courses_key();

        if let Some(courses) = read_cached(self.cache.as_ref(), &cache_key).await {
            tracing::trace!(key = %cache_key, count = courses.len(), "Cache hit for courses");
            return Ok(courses);
        }

        tracing::trace!(key = %cache_key, "Cache miss for courses");
        let courses = self.repository.get_courses().await?;
        write_cached(self.cache.as_ref(), &cache_key, &courses).await;

        Ok(courses)
    }
}
