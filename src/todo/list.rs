use tracing::{debug, trace};

use super::ids::IdGenerator;
use super::item::{Filter, Item, ItemId};
use crate::store::{Store, SubscriptionId};

/// Snapshot of an item list, as handed to subscribers.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    items: Vec<Item>,
    filter: Filter,
    ids: IdGenerator,
}

impl ListState {
    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The filter active when this snapshot was taken.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Items visible under the current filter, in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &Item> {
        let filter = self.filter;
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Number of items not yet completed.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_completed()).count()
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_completed()).count()
    }
}

/// Owns the item collection and the active filter.
///
/// All changes go through the methods here. Cloning the store shares the
/// same list, so one instance can be handed to every view that needs it.
#[derive(Clone, Default)]
pub struct ItemListStore {
    store: Store<ListState>,
}

impl ItemListStore {
    /// Create an empty list showing all items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item built from `raw_text` and reset the filter to
    /// [`Filter::All`].
    ///
    /// Blank input is ignored and yields `None`.
    pub fn add(&self, raw_text: &str) -> Option<ItemId> {
        if raw_text.trim().is_empty() {
            trace!("ignoring blank item text");
            return None;
        }

        let id = self.store.update(|state| {
            let item = Item::from_input(state.ids.next(), raw_text)?;
            let id = item.id();
            state.items.push(item);
            state.filter = Filter::All;
            Some(id)
        });
        if let Some(id) = id {
            debug!(%id, "added item");
        }
        id
    }

    /// Flip the completion flag of the item with `id`, if present.
    pub fn toggle(&self, id: ItemId) {
        let changed = self.store.update_if(|state| {
            match state.items.iter_mut().find(|item| item.id() == id) {
                Some(item) => {
                    *item = item.toggled();
                    true
                }
                None => false,
            }
        });
        if changed {
            debug!(%id, "toggled item");
        } else {
            trace!(%id, "toggle of unknown item ignored");
        }
    }

    /// Remove the item with `id`, if present.
    pub fn remove(&self, id: ItemId) {
        let changed = self.store.update_if(|state| {
            let before = state.items.len();
            state.items.retain(|item| item.id() != id);
            state.items.len() != before
        });
        if changed {
            debug!(%id, "removed item");
        } else {
            trace!(%id, "remove of unknown item ignored");
        }
    }

    /// Remove every completed item, keeping the order of the rest.
    pub fn clear_completed(&self) {
        let mut removed = 0;
        let changed = self.store.update_if(|state| {
            let before = state.items.len();
            state.items.retain(|item| !item.is_completed());
            removed = before - state.items.len();
            removed > 0
        });
        if changed {
            debug!(removed, "cleared completed items");
        }
    }

    /// Change which items the filtered view shows.
    pub fn set_filter(&self, filter: Filter) {
        let changed = self.store.update_if(|state| {
            let changed = state.filter != filter;
            state.filter = filter;
            changed
        });
        if changed {
            debug!(?filter, "filter changed");
        }
    }

    /// The active filter.
    pub fn filter(&self) -> Filter {
        self.store.read(ListState::filter)
    }

    /// Items visible under the current filter, recomputed on every call.
    pub fn filtered_view(&self) -> Vec<Item> {
        self.store.read(|state| state.visible().cloned().collect())
    }

    /// Every item regardless of the filter.
    pub fn items(&self) -> Vec<Item> {
        self.store.read(|state| state.items.clone())
    }

    /// The item with `id`, if present.
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.store
            .read(|state| state.items.iter().find(|item| item.id() == id).cloned())
    }

    /// Number of items regardless of the filter.
    pub fn len(&self) -> usize {
        self.store.read(|state| state.items.len())
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items not yet completed.
    pub fn active_count(&self) -> usize {
        self.store.read(ListState::active_count)
    }

    /// Number of completed items.
    pub fn completed_count(&self) -> usize {
        self.store.read(ListState::completed_count)
    }

    /// Run `callback` after every change to the list or filter.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ListState) + Send + Sync + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(Item::text).collect()
    }

    #[test]
    fn add_appends_trimmed_item() {
        let list = ItemListStore::new();
        let id = list.add("  Buy milk  ").unwrap();

        let items = list.items();
        assert_eq!(texts(&items), ["Buy milk"]);
        assert_eq!(items[0].id(), id);
        assert!(!items[0].is_completed());
    }

    #[test]
    fn add_blank_is_noop() {
        let list = ItemListStore::new();
        assert_eq!(list.add("   "), None);
        assert_eq!(list.add(""), None);
        assert!(list.is_empty());
    }

    #[test]
    fn add_resets_filter() {
        let list = ItemListStore::new();
        list.set_filter(Filter::Completed);
        list.add("Walk dog");
        assert_eq!(list.filter(), Filter::All);
    }

    #[test]
    fn blank_add_keeps_filter() {
        let list = ItemListStore::new();
        list.set_filter(Filter::Active);
        list.add("  ");
        assert_eq!(list.filter(), Filter::Active);
    }

    #[test]
    fn ids_are_unique_for_rapid_adds() {
        let list = ItemListStore::new();
        let ids: Vec<_> = (0..50).filter_map(|i| list.add(&format!("item {i}"))).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn toggle_flips_only_target() {
        let list = ItemListStore::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        list.toggle(a);
        assert!(list.get(a).unwrap().is_completed());
        assert!(!list.get(b).unwrap().is_completed());

        list.toggle(a);
        assert!(!list.get(a).unwrap().is_completed());
    }

    #[test]
    fn toggle_and_remove_unknown_are_noops() {
        let list = ItemListStore::new();
        list.add("a");
        let before = list.items();

        list.toggle(ItemId::new(-1));
        list.remove(ItemId::new(-1));
        assert_eq!(list.items(), before);
    }

    #[test]
    fn remove_keeps_order() {
        let list = ItemListStore::new();
        list.add("a");
        let b = list.add("b").unwrap();
        list.add("c");

        list.remove(b);
        assert_eq!(texts(&list.items()), ["a", "c"]);
    }

    #[test]
    fn clear_completed_removes_done_items() {
        let list = ItemListStore::new();
        let a = list.add("a").unwrap();
        list.add("b");
        let c = list.add("c").unwrap();
        list.toggle(a);
        list.toggle(c);

        list.clear_completed();
        assert_eq!(texts(&list.items()), ["b"]);
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn filtered_view_follows_filter() {
        let list = ItemListStore::new();
        let a = list.add("a").unwrap();
        list.add("b");
        list.toggle(a);

        list.set_filter(Filter::Active);
        assert_eq!(texts(&list.filtered_view()), ["b"]);

        list.set_filter(Filter::Completed);
        assert_eq!(texts(&list.filtered_view()), ["a"]);

        list.set_filter(Filter::All);
        assert_eq!(texts(&list.filtered_view()), ["a", "b"]);
    }

    #[test]
    fn counts() {
        let list = ItemListStore::new();
        let a = list.add("a").unwrap();
        list.add("b");
        list.add("c");
        list.toggle(a);

        assert_eq!(list.len(), 3);
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn subscribers_skip_noops() {
        let list = ItemListStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        list.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        list.add("  ");
        list.toggle(ItemId::new(42));
        list.remove(ItemId::new(42));
        list.clear_completed();
        list.set_filter(Filter::All);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let id = list.add("a").unwrap();
        list.toggle(id);
        list.set_filter(Filter::Completed);
        list.clear_completed();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn subscriber_receives_visible_items() {
        let list = ItemListStore::new();
        let visible = Arc::new(AtomicUsize::new(0));
        let visible_clone = visible.clone();
        list.subscribe(move |state| {
            visible_clone.store(state.visible().count(), Ordering::SeqCst);
        });

        let a = list.add("a").unwrap();
        list.add("b");
        list.toggle(a);
        list.set_filter(Filter::Completed);
        assert_eq!(visible.load(Ordering::SeqCst), 1);
    }
}
