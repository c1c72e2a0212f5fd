//! Runtime configuration resolved from the environment.

use std::path::PathBuf;

use crate::core::constants::{
    DATA_DIR_ENV, DATA_DIR_NAME, PROGRESS_KEY_ENV, PROGRESS_STORAGE_KEY,
};
use crate::storage::{FileStore, StorageError};

/// Where and under which key progress is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the file store writes into.
    pub data_dir: PathBuf,
    /// Storage key of the progress record.
    pub progress_key: String,
}

impl Config {
    /// Resolve from the process environment.
    ///
    /// `BOMI_DATA_DIR` overrides the default `~/.bomi` directory and
    /// `BOMI_PROGRESS_KEY` the storage key of the progress record.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` to read environment variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StorageError> {
        let data_dir = match lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };
        let progress_key = lookup(PROGRESS_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| PROGRESS_STORAGE_KEY.to_string());
        Ok(Self {
            data_dir,
            progress_key,
        })
    }

    /// Open the file store rooted at `data_dir`.
    pub fn open_file_store(&self) -> Result<FileStore, StorageError> {
        FileStore::new(&self.data_dir)
    }
}

/// The default data directory (`~/.bomi`).
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let home_dir = dirs::home_dir().ok_or(StorageError::NoDataDir)?;
    Ok(home_dir.join(DATA_DIR_NAME))
}
