//! Pure functions for serializing collections to and from cache text.
//!
//! Collections are stored as JSON arrays so cached values stay human-readable
//! and can be inspected with `redis-cli GET`.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to text.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize text to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a slice of items to a JSON array.
pub fn serialize_items<T: Serialize>(items: &[T]) -> Result<String> {
    serde_json::to_string(items).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes a JSON array into a vector of items.
///
/// Anything other than a well-formed array of `T` is an error; there is no
/// partial result.
pub fn deserialize_items<T: DeserializeOwned>(text: &str) -> Result<Vec<T>> {
    serde_json::from_str(text).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
