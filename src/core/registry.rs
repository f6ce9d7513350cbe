//! # Subscription registry - `EventKey` → set of handlers.
//!
//! The registry is the only shared mutable state of a bus. It sits behind one
//! reader/writer lock:
//! - `subscribe` / `unsubscribe` take the write lock;
//! - `snapshot` and the lookups take the read lock.
//!
//! ## Rules
//! - A handler appears at most once per key (set semantics).
//! - A key whose set becomes empty is removed; an unknown key and a key whose
//!   handlers were all removed are indistinguishable.
//! - `snapshot` copies the set out; callers dispatch after the lock is released.
//! - Handlers removed from the map are dropped after the lock is released.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::events::EventKey;
use crate::handlers::HandlerRef;

/// Lock-guarded mapping of event keys to subscribed handlers.
#[derive(Default)]
pub(crate) struct Registry {
    subscribers: RwLock<HashMap<EventKey, HashSet<HandlerRef>>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `handler` under `key`. Returns `false` if it was already there.
    pub(crate) fn subscribe(&self, key: EventKey, handler: &HandlerRef) -> bool {
        let mut map = self.subscribers.write();
        map.entry(key).or_default().insert(handler.clone())
    }

    /// Removes `handler` from `key`. Returns `false` if it was not subscribed.
    pub(crate) fn unsubscribe(&self, key: EventKey, handler: &HandlerRef) -> bool {
        // Declared before the guard so it is dropped after the lock is released.
        let removed: Option<HandlerRef>;
        {
            let mut map = self.subscribers.write();
            let Some(set) = map.get_mut(&key) else {
                return false;
            };
            removed = set.take(handler);
            if set.is_empty() {
                map.remove(&key);
            }
        }
        removed.is_some()
    }

    /// Point-in-time copy of the handlers under `key` (empty if none).
    pub(crate) fn snapshot(&self, key: EventKey) -> Vec<HandlerRef> {
        let map = self.subscribers.read();
        map.get(&key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Handlers under `key`, or `None` if the key has no entry.
    pub(crate) fn lookup(&self, key: EventKey) -> Option<Vec<HandlerRef>> {
        let map = self.subscribers.read();
        map.get(&key).map(|set| set.iter().cloned().collect())
    }

    pub(crate) fn contains(&self, key: EventKey, handler: &HandlerRef) -> bool {
        let map = self.subscribers.read();
        map.get(&key).is_some_and(|set| set.contains(handler))
    }

    pub(crate) fn count(&self, key: EventKey) -> usize {
        let map = self.subscribers.read();
        map.get(&key).map_or(0, HashSet::len)
    }

    /// Number of keys with at least one handler.
    pub(crate) fn len(&self) -> usize {
        self.subscribers.read().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.subscribers.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::events::{Event, EventRef};
    use crate::handlers::Handler;

    struct Primary;
    struct Secondary;
    impl Event for Primary {}
    impl Event for Secondary {}

    struct Noop;

    #[async_trait]
    impl Handler for Noop {
        async fn on_event(&self, _event: &EventRef) {}
    }

    fn primary() -> EventKey {
        EventKey::of::<Primary>()
    }

    fn secondary() -> EventKey {
        EventKey::of::<Secondary>()
    }

    #[test]
    fn subscribe_is_idempotent() {
        let reg = Registry::new();
        let h = HandlerRef::new(Noop);

        assert!(reg.subscribe(primary(), &h));
        assert!(!reg.subscribe(primary(), &h));
        assert!(!reg.subscribe(EventKey::of_val(&Primary), &h.clone()));

        assert_eq!(reg.count(primary()), 1);
        assert!(reg.contains(primary(), &h));
    }

    #[test]
    fn distinct_handlers_and_keys_are_tracked_separately() {
        let reg = Registry::new();
        let h1 = HandlerRef::new(Noop);
        let h2 = HandlerRef::new(Noop);

        reg.subscribe(primary(), &h1);
        reg.subscribe(primary(), &h2);
        reg.subscribe(secondary(), &h1);

        assert_eq!(reg.count(primary()), 2);
        assert_eq!(reg.count(secondary()), 1);
        assert!(!reg.contains(secondary(), &h2));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn unsubscribe_unknown_pair_is_a_noop() {
        let reg = Registry::new();
        let h1 = HandlerRef::new(Noop);
        let h2 = HandlerRef::new(Noop);

        // Unknown key.
        assert!(!reg.unsubscribe(primary(), &h1));
        assert!(reg.is_empty());

        // Known key, unknown handler.
        reg.subscribe(primary(), &h1);
        assert!(!reg.unsubscribe(primary(), &h2));
        assert!(reg.contains(primary(), &h1));
        assert_eq!(reg.count(primary()), 1);
    }

    #[test]
    fn unsubscribe_keeps_other_handlers() {
        let reg = Registry::new();
        let h1 = HandlerRef::new(Noop);
        let h2 = HandlerRef::new(Noop);
        reg.subscribe(primary(), &h1);
        reg.subscribe(primary(), &h2);

        assert!(reg.unsubscribe(primary(), &h1));
        assert!(!reg.contains(primary(), &h1));
        assert!(reg.contains(primary(), &h2));

        // Second time is harmless.
        assert!(!reg.unsubscribe(primary(), &h1));
        assert!(reg.contains(primary(), &h2));
    }

    #[test]
    fn empty_set_is_reclaimed() {
        let reg = Registry::new();
        let h = HandlerRef::new(Noop);

        reg.subscribe(primary(), &h);
        reg.unsubscribe(primary(), &h);

        assert!(reg.lookup(primary()).is_none());
        assert_eq!(reg.lookup(primary()), reg.lookup(secondary()));
        assert!(reg.is_empty());
        assert_eq!(reg.len(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let reg = Registry::new();
        let h1 = HandlerRef::new(Noop);
        let h2 = HandlerRef::new(Noop);
        reg.subscribe(primary(), &h1);

        let snap = reg.snapshot(primary());
        reg.subscribe(primary(), &h2);
        reg.unsubscribe(primary(), &h1);

        assert_eq!(snap, vec![h1]);
        assert_eq!(reg.snapshot(primary()), vec![h2]);
        assert!(reg.snapshot(secondary()).is_empty());
    }

    #[test]
    fn registry_holds_the_last_reference() {
        let reg = Registry::new();
        let h = HandlerRef::new(Noop);
        let weak = std::sync::Arc::downgrade(h.handler());

        reg.subscribe(primary(), &h);
        drop(h);
        assert!(weak.upgrade().is_some());

        let h = HandlerRef::from_arc(weak.upgrade().unwrap());
        reg.unsubscribe(primary(), &h);
        drop(h);
        assert!(weak.upgrade().is_none());
    }
}
