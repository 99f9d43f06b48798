//! Cached repository decorators.
//!
//! This module provides decorator implementations that wrap repository traits
//! with read-through caching. Every decorator follows the same cache-aside
//! contract:
//!
//! - A non-empty cached list is returned without touching the repository
//! - An absent, empty or unreadable cached value is a miss
//! - On a miss the repository is called and its result is written back
//! - Cache failures are logged and never change the returned data
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let upstream = Arc::new(UpstreamClient::new(base_url, api_key, timeout)?);
//! let cache = Arc::new(MemoryCache::new(10_000));
//!
//! let courses = CachedCourseRepository::new(upstream, cache);
//! ```

mod course;
mod enrollment;
mod user;

#[cfg(test)]
pub(crate) mod mock;

pub use course::CachedCourseRepository;
pub use enrollment::CachedEnrollmentRepository;
pub use user::CachedUserRepository;

use serde::{de::DeserializeOwned, Serialize};

use enrollsync_core::cache::{deserialize_items, serialize_items, Cache};

/// Reads a cached list, returning `None` for anything that is not a hit.
async fn read_cached<T, C>(cache: &C, key: &str) -> Option<Vec<T>>
where
    T: DeserializeOwned,
    C: Cache + ?Sized,
{
    let text = match cache.get(key).await {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Cache read failed");
            return None;
        }
    };

    match deserialize_items::<T>(&text) {
        Ok(items) if !items.is_empty() => Some(items),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Cached value could not be parsed");
            None
        }
    }
}

/// Writes a fetched list back to the cache. Failures are only logged.
async fn write_cached<T, C>(cache: &C, key: &str, items: &[T])
where
    T: Serialize,
    C: Cache + ?Sized,
{
    let text = match serialize_items(items) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "Failed to serialize value for cache");
            return;
        }
    };

    if let Err(err) = cache.set(key, &text).await {
        tracing::warn!(key = %key, error = %err, "Failed to write cache");
    }
}
