//! Persisted light/dark display preference.

mod storage;
mod store;
mod theme;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{PreferenceStore, THEME_STORAGE_KEY};
pub use theme::Preference;
