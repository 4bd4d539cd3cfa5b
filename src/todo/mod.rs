//! The item list: items with a completion flag, and a filter over them.

mod ids;
mod item;
mod list;

pub use item::{Filter, Item, ItemId};
pub use list::{ItemListStore, ListState};
