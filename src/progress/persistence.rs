//! Progress persistence (load/save through a key-value store).

use tracing::{info, warn};

use super::types::UserProgress;
use crate::storage::{KeyValueStore, StorageError};
use crate::utils::persistence::{load_json, save_json};

/// Load progress stored under `key`, or return the initial progress if it is
/// absent, unreadable or malformed. A loaded record is normalized.
pub fn load_progress<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> UserProgress {
    match load_json::<UserProgress, _>(store, key) {
        Ok(Some(mut progress)) => {
            if progress.normalize() {
                info!("Repaired stored progress under '{}'", key);
            }
            progress
        }
        Ok(None) => UserProgress::default(),
        Err(e) => {
            warn!("Failed to load progress from '{}', starting fresh: {}", key, e);
            UserProgress::default()
        }
    }
}

/// Save progress under `key`.
pub fn save_progress<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    progress: &UserProgress,
) -> Result<(), StorageError> {
    save_json(store, key, progress)
}
