//! enrollsync_core - functional core for the enrollsync project.
//!
//! Holds the domain types, the cache and repository contracts, the paginated
//! crawl loop and the pure aggregation operations. Nothing in this crate
//! performs network I/O on its own.

pub mod cache;
pub mod catalog;
pub mod storage;
