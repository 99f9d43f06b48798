//! Application state shared by every request handler.
//!
//! The cache handle is created once at startup and injected both into the
//! cached repositories and into the state, where the readiness probe uses it.
//! The backend is chosen at compile time via feature flags.

use std::sync::Arc;

use enrollsync_core::cache::Cache;

use crate::config::Config;
use crate::service::PublishedCoursesService;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The published courses aggregation, wired to cached repositories.
    pub service: Arc<PublishedCoursesService>,
    /// The cache handle, used by the readiness probe.
    pub cache: Arc<dyn Cache>,
}

impl AppState {
    /// Creates an AppState from already built parts.
    pub fn from_parts(service: PublishedCoursesService, cache: Arc<dyn Cache>) -> Self {
        Self {
            service: Arc::new(service),
            cache,
        }
    }
}

// ============================================================================
// Factory functions for each cache backend
// ============================================================================

/// Wires the upstream client behind the cache-aside decorators.
fn build_service<C>(config: &Config, cache: Arc<C>) -> anyhow::Result<PublishedCoursesService>
where
    C: Cache + 'static,
{
    use crate::storage::{CachedCourseRepository, CachedEnrollmentRepository, CachedUserRepository};
    use crate::upstream::UpstreamClient;

    let upstream = Arc::new(UpstreamClient::new(
        config.upstream_base_url.clone(),
        &config.upstream_api_key,
        config.upstream_timeout(),
    )?);
    tracing::debug!(base_url = upstream.base_url(), "Upstream client ready");

    Ok(PublishedCoursesService::new(
        Arc::new(CachedCourseRepository::new(upstream.clone(), cache.clone())),
        Arc::new(CachedUserRepository::new(upstream.clone(), cache.clone())),
        Arc::new(CachedEnrollmentRepository::new(upstream, cache)),
    ))
}

#[cfg(feature = "memory")]
mod memory {
    use super::*;
    use crate::cache::MemoryCache;

    impl AppState {
        /// Creates AppState with the in-process LRU cache.
        pub fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let service = build_service(config, cache.clone())?;

            tracing::info!(
                upstream = %config.upstream_base_url,
                max_entries = config.cache_max_entries,
                "Using in-memory cache"
            );

            Ok(Self::from_parts(service, cache))
        }
    }
}

#[cfg(feature = "redis")]
mod redis_backend {
    use super::*;
    use crate::cache::RedisCache;

    impl AppState {
        /// Creates AppState with the Redis cache.
        ///
        /// The Redis connection is not opened here; it is established on
        /// first use.
        pub fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(RedisCache::new(&config.redis_url)?);
            let service = build_service(config, cache.clone())?;

            tracing::info!(
                upstream = %config.upstream_base_url,
                redis = %cache.address(),
                "Using Redis cache"
            );

            Ok(Self::from_parts(service, cache))
        }
    }
}
