//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-process cache for single-instance deployments
//! and for running without a Redis server.

mod cache;

pub use cache::MemoryCache;
