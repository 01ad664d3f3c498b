//! memora-storage
//!
//! Key/value persistence of JSON documents. Keys follow the conventions in
//! [`memora_core::storage_keys`]. Single process, single writer.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;

use async_trait::async_trait;

use error::StorageError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A store of JSON values addressed by `/`-separated keys.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The value under `key`, or `None` if nothing was stored.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Check a key: non-empty `/`-separated segments of ASCII letters, digits,
/// `-`, `_` and `.`, with no segment made only of dots.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.split('/').all(|segment| {
            !segment.is_empty()
                && !segment.chars().all(|c| c == '.')
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        });
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}
