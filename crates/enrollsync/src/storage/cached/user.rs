//! Cached user repository decorator.

use std::sync::Arc;

use async_trait::async_trait;

use enrollsync_core::cache::{users_key, Cache};
use enrollsync_core::catalog::User;
use enrollsync_core::storage::{Result, UserRepository};

use super::{read_cached, write_cached};

/// Cached user repository decorator.
///
/// Same contract as [`CachedCourseRepository`](super::CachedCourseRepository),
/// stored under the `users` key.
pub struct CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R, C> CachedUserRepository<R, C>
where
    R: UserRepository,
    C: Cache,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R, C> UserRepository for CachedUserRepository<R, C>
where
    R: UserRepository + 'static,
    C: Cache + 'static,
{
    async fn get_users(&self) -> Result<Vec<User>> {
        let cache_key = users_key();

        if let Some(users) = read_cached(self.cache.as_ref(), &cache_key).await {
            tracing::trace!(key = %cache_key, count = users.len(), "Cache hit for users");
            return Ok(users);
        }

        tracing::trace!(key = %cache_key, "Cache miss for users");
        let users = self.repository.get_users().await?;
        write_cached(self.cache.as_ref(), &cache_key, &users).await;

        Ok(users)
    }
}
