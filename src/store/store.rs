use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// A shared state container that notifies subscribers after each change.
///
/// Cloning a store yields another handle to the same state, which is how a
/// store instance is handed to the parts of a view that need it.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber<T>)>>>,
    next_subscription: Arc<AtomicUsize>,
}

impl<T: Clone> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_subscription: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.state_read().clone()
    }

    /// Read state through a closure without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&*self.state_read())
    }

    /// Update the state and notify subscribers unconditionally.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = f(&mut *self.state_write());
        self.notify();
        result
    }

    /// Update the state, notifying subscribers only when `f` reports a change.
    ///
    /// Returns whatever `f` reported.
    pub fn update_if<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let changed = f(&mut *self.state_write());
        if changed {
            self.notify();
        }
        changed
    }

    /// Replace the state and notify subscribers.
    pub fn set(&self, new_state: T) {
        *self.state_write() = new_state;
        self.notify();
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs after every change with a snapshot of the new state.
    /// No lock is held while it runs, so it may read or update the store.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        if subscribers.is_empty() {
            return;
        }

        let snapshot = self.get();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    fn state_read(&self) -> RwLockReadGuard<'_, T> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_write(&self) -> RwLockWriteGuard<'_, T> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
            next_subscription: Arc::clone(&self.next_subscription),
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
