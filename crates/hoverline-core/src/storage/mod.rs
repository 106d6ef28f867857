//! Key-value persistence for widget values.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

/// Value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Key not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Store error: {0}")]
    Other(String),
}

/// Result type for value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for string key-value backends.
///
/// Implementations can keep values in memory or in the browser's
/// `localStorage`. Everything runs on the UI thread, so no `Send`/`Sync`
/// bounds are required.
pub trait ValueStore {
    /// Store a value under `key`, replacing any previous one.
    fn save(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Load the value stored under `key`.
    fn load(&self, key: &str) -> StoreResult<String>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check if `key` has a value.
    fn exists(&self, key: &str) -> StoreResult<bool> {
        match self.load(key) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
