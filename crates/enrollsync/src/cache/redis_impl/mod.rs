//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis so several instances reuse the same
//! upstream snapshots. The connection is opened lazily and multiplexed
//! through a connection manager.

mod cache;
mod error;

pub use cache::RedisCache;
