//! Repository implementations layered on top of the upstream client.
//!
//! The cache-aside decorators in [`cached`] wrap any repository from
//! `enrollsync_core::storage` with a [`Cache`](enrollsync_core::cache::Cache)
//! backend. The in-memory fixture repository is only built for tests.

pub mod cached;

#[cfg(test)]
pub mod inmemory;

pub use cached::{CachedCourseRepository, CachedEnrollmentRepository, CachedUserRepository};
