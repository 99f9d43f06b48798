//! Mock cache shared by decorator and router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use enrollsync_core::cache::{Cache, CacheError, Result};

/// Cache backed by a `HashMap` that counts calls and can be told to fail.
pub(crate) struct MockCache {
    store: RwLock<HashMap<String, String>>,
    fail: bool,
    get_calls: AtomicUsize,
    set_calls: AtomicUsize,
}

impl MockCache {
    pub(crate) fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            fail: false,
            get_calls: AtomicUsize::new(0),
            set_calls: AtomicUsize::new(0),
        }
    }

    /// A cache whose every operation fails as if the server were down.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub(crate) async fn insert(&self, key: &str, value: &str) {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) async fn value(&self, key: &str) -> Option<String> {
        self.store.read().await.get(key).cloned()
    }

    pub(crate) fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn set_calls(&self) -> usize {
        self.set_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> CacheError {
        CacheError::ConnectionFailed("connection refused".to_string())
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn connect(&self) -> Result<()> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unavailable());
        }
        self.insert(key, value).await;
        Ok(())
    }
}
