use async_trait::async_trait;

use super::Result;

/// Trait for a connected key-value text store.
///
/// Implementations open their connection lazily. `get` and `set` connect on
/// demand, so callers never need to call [`Cache::connect`] first, but may do
/// so to fail fast or to probe readiness.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Opens the connection if it is not already open.
    ///
    /// Idempotent and safe to call concurrently: at most one connection is
    /// ever established.
    async fn connect(&self) -> Result<()>;

    /// Gets a value from the cache by key. A missing key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value, overwriting whatever was stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
