use tracing::{debug, warn};

use super::storage::{FileStorage, KeyValueStorage};
use super::theme::Preference;
use crate::config::StorageConfig;
use crate::error::Result;
use crate::store::{Store, SubscriptionId};

/// Storage key the display preference lives under.
pub const THEME_STORAGE_KEY: &str = "@todoList: theme";

/// Holds the display preference and mirrors it into durable storage.
#[derive(Clone)]
pub struct PreferenceStore<S> {
    store: Store<Preference>,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    /// Load the preference stored under [`THEME_STORAGE_KEY`].
    ///
    /// Missing, unreadable or foreign values fall back to
    /// [`Preference::Dark`].
    pub fn initialize(storage: S) -> Self {
        Self::initialize_with_key(storage, THEME_STORAGE_KEY)
    }

    /// Like [`initialize`](Self::initialize) with a custom storage key.
    pub fn initialize_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = load(&storage, &key);
        debug!(key = %key, preference = ?initial, "initialized display preference");
        Self {
            store: Store::new(initial),
            storage,
            key,
        }
    }

    /// The current display preference.
    pub fn current(&self) -> Preference {
        self.store.get()
    }

    /// Flip between light and dark and persist the new value.
    ///
    /// The in-memory value flips even if the write fails; the write error
    /// is returned so the caller can report it.
    pub fn toggle(&self) -> Result<Preference> {
        let next = self.store.update(|pref| {
            *pref = pref.toggled();
            *pref
        });
        debug!(preference = ?next, "toggled display preference");

        if let Err(e) = self.storage.set(&self.key, &next.encode()) {
            warn!(key = %self.key, error = %e, "failed to persist display preference");
            return Err(e);
        }
        Ok(next)
    }

    /// Key the preference is stored under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Run `callback` with the new value after every toggle.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Preference) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

impl PreferenceStore<FileStorage> {
    /// Open the configured storage file and load the preference from it.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::initialize_with_key(config.open(), config.theme_key.clone())
    }
}

fn load<S: KeyValueStorage>(storage: &S, key: &str) -> Preference {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Preference::default(),
        Err(e) => {
            warn!(key, error = %e, "could not read display preference, using default");
            return Preference::default();
        }
    };

    Preference::decode(&raw).unwrap_or_else(|| {
        warn!(key, value = %raw, "unrecognized display preference, using default");
        Preference::default()
    })
}
