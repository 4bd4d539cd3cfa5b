use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Key/value persistence that survives across sessions.
///
/// Values are raw strings; callers choose their own encoding.
pub trait KeyValueStorage {
    /// The value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Storage backed by one JSON object file mapping keys to raw strings.
///
/// A missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage kept in the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Like `load`, but a corrupt file reads as empty so the next write
    /// replaces it. The flag reports whether that happened.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(Error::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "storage file is corrupt, overwriting");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "wrote storage file");
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let (mut entries, recovered) = self.load_for_write()?;
        if entries.remove(key).is_some() || recovered {
            self.save(&entries)?;
        }
        Ok(())
    }
}
