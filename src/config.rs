use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::preference::{FileStorage, THEME_STORAGE_KEY};

/// Where durable state is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,

    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tincan-todo");
    path.push("storage.json");
    path
}

fn default_theme_key() -> String {
    THEME_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            theme_key: default_theme_key(),
        }
    }
}

impl StorageConfig {
    /// Default configuration with the storage file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Storage backed by the configured file.
    pub fn open(&self) -> FileStorage {
        FileStorage::new(&self.path)
    }
}
