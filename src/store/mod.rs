//! Shared state containers.
//!
//! A [`Store`] owns a value, applies updates to it and tells subscribers
//! when it changed. The item list and preference stores are built on it.

mod store;

pub use store::{Store, SubscriptionId};
