//! # Scoped subscriptions.
//!
//! [`Subscription`] is the guard returned by [`Bus::subscribe_scoped`]: it
//! unsubscribes its `(key, handler)` pair when dropped. The guard only holds a
//! weak reference, so it never keeps a bus alive; if the bus is gone first,
//! dropping the guard does nothing.
//!
//! ## Example
//! ```rust
//! use eventbus::{Bus, Event, EventKey, EventRef, HandlerFn, HandlerRef};
//!
//! struct Tick;
//! impl Event for Tick {}
//!
//! let bus = Bus::new();
//! let h: HandlerRef = HandlerFn::arc("tick", |_ev: EventRef| async {}).into();
//!
//! {
//!     let _sub = bus.subscribe_scoped(EventKey::of::<Tick>(), &h);
//!     assert!(bus.has_subscriber(EventKey::of::<Tick>(), &h));
//! }
//! assert!(bus.subscribers(EventKey::of::<Tick>()).is_none());
//! ```

use std::fmt;

use crate::core::bus::WeakBus;
use crate::events::EventKey;
use crate::handlers::HandlerRef;

/// Guard that unsubscribes a handler from one key on drop.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct Subscription {
    bus: Option<WeakBus>,
    key: EventKey,
    handler: HandlerRef,
}

impl Subscription {
    pub(crate) fn new(bus: WeakBus, key: EventKey, handler: HandlerRef) -> Self {
        Self {
            bus: Some(bus),
            key,
            handler,
        }
    }

    /// Key this guard is subscribed to.
    pub fn key(&self) -> EventKey {
        self.key
    }

    /// Handler this guard keeps subscribed.
    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    /// Unsubscribes now. Same as dropping the guard.
    pub fn cancel(self) {
        drop(self);
    }

    /// Detaches the guard; the subscription stays until unsubscribed explicitly.
    pub fn forget(mut self) {
        self.bus = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.take().and_then(|weak| weak.upgrade()) {
            bus.unsubscribe(self.key, &self.handler);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("key", &self.key)
            .field("handler", &self.handler)
            .field("attached", &self.bus.is_some())
            .finish()
    }
}
