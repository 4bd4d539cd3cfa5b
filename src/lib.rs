//! # Tincan Todo
//!
//! State for a small list-management widget, built on tincan-style stores.
//!
//! Two independent stores are provided. Create one instance of each and hand
//! it (or a clone of its handle) to the views that need it:
//!
//! - [`ItemListStore`] owns the items and the active [`Filter`], and exposes
//!   add, toggle, remove, clear-completed and a filtered view.
//! - [`PreferenceStore`] owns the light/dark [`Preference`] and mirrors it
//!   into [`KeyValueStorage`] so it survives across sessions.
//!
//! Both notify subscribers after each change, which is the hook a renderer
//! uses to redraw.
//!
//! ```
//! use tincan_todo::{Filter, ItemListStore, MemoryStorage, Preference, PreferenceStore};
//!
//! let list = ItemListStore::new();
//! let milk = list.add("Buy milk").unwrap();
//! list.add("Walk dog");
//! list.toggle(milk);
//! list.set_filter(Filter::Active);
//! assert_eq!(list.filtered_view()[0].text(), "Walk dog");
//!
//! let prefs = PreferenceStore::initialize(MemoryStorage::new());
//! assert_eq!(prefs.current(), Preference::Dark);
//! ```

pub mod config;
pub mod error;
pub mod preference;
pub mod store;
pub mod todo;

// Re-export main types for convenience
pub use config::StorageConfig;
pub use error::{Error, Result};
pub use preference::{
    FileStorage, KeyValueStorage, MemoryStorage, Preference, PreferenceStore, THEME_STORAGE_KEY,
};
pub use store::{Store, SubscriptionId};
pub use todo::{Filter, Item, ItemId, ItemListStore, ListState};
