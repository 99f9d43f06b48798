//! In-memory cache implementation with LRU eviction.
//!
//! Mirrors the Redis backend: values never expire, a `set` overwrites the
//! previous value, and `connect` is a no-op because there is nothing to open.

use std::num::NonZeroUsize;
use std::sync::Arc;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use enrollsync_core::cache::{Cache, Result};

/// In-memory cache implementation with LRU eviction.
///
/// Uses `Arc<Mutex<LruCache>>`; every read refreshes recency, so even `get`
/// needs exclusive access.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<Mutex<LruCache<String, String>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` keys.
    ///
    /// A capacity of 0 is treated as 1.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            store: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn connect(&self) -> Result<()> {
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut store = self.store.lock().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        store.put(key.to_string(), value.to_string());
        Ok(())
    }
}
