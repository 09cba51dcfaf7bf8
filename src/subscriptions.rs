//! Callback registry notified after every successful mutation.
//!
//! Listeners receive no arguments; they re-fetch the snapshot. Notification
//! is synchronous and happens after the mutation and audit append are
//! committed. A listener must not issue a mutation command from inside the
//! callback.

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared list of snapshot listeners.
#[derive(Clone, Default)]
pub struct Subscribers {
    registry: Arc<Mutex<Registry>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned handle is unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Invokes every registered listener in subscription order.
    pub fn notify(&self) {
        // Listeners run outside the lock so they may subscribe or unsubscribe.
        let listeners: Vec<Listener> = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        log::debug!("Notifying {} snapshot listener(s)", listeners.len());
        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Debug)]
#[must_use = "dropping the handle keeps the listener registered forever"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Removes the listener. Returns `false` if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != self.id);
        registry.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notifies_until_unsubscribed() {
        let subscribers = Subscribers::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = subscribers.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscribers.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(subscription.unsubscribe());
        subscribers.notify();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn unsubscribe_removes_only_own_listener() {
        let subscribers = Subscribers::new();
        let first = subscribers.subscribe(|| {});
        let _second = subscribers.subscribe(|| {});

        assert!(first.unsubscribe());
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn listener_may_subscribe_during_notification() {
        let subscribers = Subscribers::new();
        let inner = subscribers.clone();
        let _subscription = subscribers.subscribe(move || {
            let _nested = inner.subscribe(|| {});
        });

        subscribers.notify();
        assert_eq!(subscribers.len(), 2);
    }
}
