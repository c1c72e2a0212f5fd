//! Generic JSON persistence helpers over a [`KeyValueStore`].
//!
//! Shared by the progress store and the score board.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::storage::{KeyValueStore, StorageError};

/// Load and decode the JSON value under `key`. `Ok(None)` if absent.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        None => Ok(None),
    }
}

/// Load the JSON value under `key`, returning `T::default()` if it is
/// missing, unreadable or invalid. Failures are logged.
pub fn load_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: Default + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to load '{}', using defaults: {}", key, e);
            T::default()
        }
    }
}

/// Save a value as pretty-printed JSON under `key`.
pub fn save_json<T, S>(store: &mut S, key: &str, data: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_vec_pretty(data)?;
    store.set(key, &json)
}
