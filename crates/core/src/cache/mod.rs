mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{courses_key, enrollments_key, users_key};
pub use serialization::{deserialize_items, serialize_items, SerializationError};
pub use traits::Cache;
