use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::KeyValueStore;

/// Load a typed document. Returns `None` if the key has never been set.
pub async fn load_state<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Load a typed document, falling back to `T::default()` when absent.
pub async fn load_state_or_default<T: DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<T, StorageError> {
    Ok(load_state(store, key).await?.unwrap_or_default())
}

/// Save a typed document.
pub async fn save_state<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    store.set(key, serde_json::to_value(value)?).await
}

/// Append one item to a stored JSON array, creating it if absent.
pub async fn append_state<T: Serialize + DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    item: T,
) -> Result<usize, StorageError> {
    let mut items: Vec<T> = load_state_or_default(store, key).await?;
    items.push(item);
    save_state(store, key, &items).await?;
    Ok(items.len())
}
