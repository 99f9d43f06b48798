//! Redis cache implementation.
//!
//! The connection manager is created on first use and stored in a
//! `OnceCell`, so concurrent first callers wait on a single connect attempt
//! instead of racing. A failed attempt leaves the cell empty and the next
//! call tries again.
//!
//! Connecting is a single attempt bounded by [`CONNECTION_TIMEOUT`], and
//! every command is bounded by [`RESPONSE_TIMEOUT`]. With Redis down a cache
//! call fails within those bounds and the caller falls back to upstream.
//!
//! Every write is a single `SET` of a fully serialized payload. Dropping the
//! future mid-flight (request timeout, client disconnect) either leaves the
//! previous value or the new one in place, never a partial value.

use async_trait::async_trait;
use std::time::Duration;

use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands,
};
use tokio::sync::OnceCell;

use enrollsync_core::cache::{Cache, Result};

use super::error::map_redis_error;

/// Upper bound for opening the connection.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_millis(500);

/// Upper bound for a single `GET` or `SET`.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

fn manager_config() -> ConnectionManagerConfig {
    ConnectionManagerConfig::new()
        .set_number_of_retries(0)
        .set_connection_timeout(CONNECTION_TIMEOUT)
        .set_response_timeout(RESPONSE_TIMEOUT)
}

/// Redis cache backend using a lazily created connection manager.
pub struct RedisCache {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisCache {
    /// Creates a Redis cache handle without connecting.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::OperationFailed` if the URL cannot be parsed.
    pub fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    /// Host and port of the server, without credentials.
    pub fn address(&self) -> String {
        self.client.get_connection_info().addr.to_string()
    }

    /// Returns a handle to the shared connection, opening it if needed.
    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                tracing::debug!("Opening Redis connection");
                ConnectionManager::new_with_config(self.client.clone(), manager_config())
                    .await
                    .map_err(map_redis_error)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn connect(&self) -> Result<()> {
        self.connection().await.map(|_| ())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection().await?;
        let result: Option<String> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }
}
