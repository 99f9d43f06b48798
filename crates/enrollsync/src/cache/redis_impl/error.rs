//! Translation of Redis failures into cache errors.
//!
//! Anything that means "the server cannot be reached right now" becomes
//! `ConnectionFailed`, so readiness reports it as an outage. Everything else,
//! including a malformed `REDIS_URL`, is an `OperationFailed`.

use enrollsync_core::cache::CacheError;

/// Maps a Redis error onto the cache error taxonomy.
pub fn map_redis_error(err: redis::RedisError) -> CacheError {
    let unreachable = err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
        || err.is_io_error();

    if unreachable {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}
