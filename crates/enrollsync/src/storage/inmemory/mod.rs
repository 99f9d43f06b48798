//! In-memory storage backend for testing.
//!
//! [`InMemoryRepository`] implements the course, user and enrollment
//! repository traits over fixed fixture data and counts how often each one is
//! called, so tests can assert whether a decorator reached the repository.

mod repository;

pub use repository::InMemoryRepository;
