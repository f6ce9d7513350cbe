//! # Bus: type-keyed publish/subscribe registry.
//!
//! [`Bus`] ties the subscription [`Registry`] to the [`Dispatcher`]. It is the
//! whole public surface of the crate's core: subscribe, unsubscribe, publish,
//! plus read-only lookups.
//!
//! ## Architecture
//! ```text
//! Subscribers (many):              Publishers (many):
//!   subscribe(K, h) ──┐              publish(e) ──► K = EventKey::of_val(&e)
//!   unsubscribe(K, h) ┤                              │
//!                     ▼ write lock                   ▼ read lock
//!               ┌──────────────────────────────────────────┐
//!               │ Registry: HashMap<EventKey, {HandlerRef}> │
//!               └──────────────────────────────────────────┘
//!                                                    │ snapshot [h1..hN], lock released
//!                                                    ▼
//!                                  Dispatcher: one detached unit per handler
//!                                          h1.on_event(e) ... hN.on_event(e)
//! ```
//!
//! ## Rules
//! - **Type-keyed**: routing uses the event's type, never its value.
//! - **Idempotent subscribe**: a handler is registered at most once per key.
//! - **Safe unsubscribe**: unknown keys/handlers are ignored; empty keys are removed.
//! - **Fire-and-forget publish**: returns as soon as every invocation is spawned;
//!   outcomes and panics are not observed.
//! - **Snapshot delivery**: a publish sees the set as of its read; concurrent
//!   subscribes may or may not get the event, concurrent unsubscribes cannot
//!   cancel an invocation that was already snapshotted.
//! - **No ordering**: neither across handlers nor across publishes.
//!
//! ## Example
//! ```rust
//! use eventbus::{Bus, Event, EventKey, EventRef, HandlerFn, HandlerRef};
//! use tokio::sync::mpsc;
//!
//! struct Primary { id: u32 }
//! struct Secondary;
//! impl Event for Primary {}
//! impl Event for Secondary {}
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = Bus::new();
//!     let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
//!
//!     let handler: HandlerRef = HandlerFn::arc("primary-ids", move |ev: EventRef| {
//!         let tx = tx.clone();
//!         async move {
//!             if let Some(p) = ev.downcast_ref::<Primary>() {
//!                 let _ = tx.send(p.id);
//!             }
//!         }
//!     })
//!     .into();
//!
//!     bus.subscribe(EventKey::of::<Primary>(), &handler);
//!     bus.publish(Primary { id: 1 });
//!     bus.publish(Secondary); // no subscribers: silent no-op
//!
//!     assert_eq!(rx.recv().await, Some(1));
//!     bus.unsubscribe(EventKey::of::<Primary>(), &handler);
//!     assert!(bus.is_empty());
//! }
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use crate::core::config::Config;
use crate::core::dispatch::Dispatcher;
use crate::core::registry::Registry;
use crate::core::subscription::Subscription;
use crate::events::{Event, EventKey, EventRef};
use crate::handlers::HandlerRef;

struct Inner {
    cfg: Config,
    registry: Registry,
    dispatcher: Dispatcher,
}

/// In-process publish/subscribe bus keyed by event type.
///
/// ### Properties
/// - **Cloneable**: cheap to clone; clones share one registry.
/// - **Independent**: separate `Bus::new()` calls never share subscriptions.
/// - **Infallible**: no operation returns an error.
/// - **No teardown**: dropping the last clone frees the registry; in-flight
///   invocations keep their own references and run to completion.
#[derive(Clone)]
pub struct Bus {
    inner: Arc<Inner>,
}

impl Bus {
    /// Creates an empty bus with [`Config::default()`].
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty bus with the given configuration.
    pub fn with_config(cfg: Config) -> Self {
        let dispatcher = Dispatcher::new(&cfg);
        Self {
            inner: Arc::new(Inner {
                cfg,
                registry: Registry::new(),
                dispatcher,
            }),
        }
    }

    /// Configuration this bus was built with.
    pub fn config(&self) -> &Config {
        &self.inner.cfg
    }

    /// Subscribes `handler` to events of `key`.
    ///
    /// Idempotent: subscribing the same handler to the same key again changes
    /// nothing, and it is still notified once per publish.
    pub fn subscribe(&self, key: EventKey, handler: &HandlerRef) {
        let added = self.inner.registry.subscribe(key, handler);
        tracing::debug!(
            bus = %self.inner.cfg.name,
            event = key.name(),
            handler = handler.name(),
            added,
            "subscribe"
        );
    }

    /// Subscribes `handler` to events of type `E`.
    pub fn subscribe_to<E: Event>(&self, handler: &HandlerRef) {
        self.subscribe(EventKey::of::<E>(), handler);
    }

    /// Subscribes `handler` to `key` until the returned guard is dropped.
    ///
    /// The guard unsubscribes exactly this `(key, handler)` pair, which also
    /// removes a subscription made earlier through [`Bus::subscribe`].
    #[must_use = "dropping the guard unsubscribes immediately"]
    pub fn subscribe_scoped(&self, key: EventKey, handler: &HandlerRef) -> Subscription {
        self.subscribe(key, handler);
        Subscription::new(self.downgrade(), key, handler.clone())
    }

    /// Unsubscribes `handler` from `key`.
    ///
    /// Unknown keys or handlers are ignored. When the last handler of a key is
    /// removed, the key itself is dropped.
    pub fn unsubscribe(&self, key: EventKey, handler: &HandlerRef) {
        let removed = self.inner.registry.unsubscribe(key, handler);
        tracing::debug!(
            bus = %self.inner.cfg.name,
            event = key.name(),
            handler = handler.name(),
            removed,
            "unsubscribe"
        );
    }

    /// Unsubscribes `handler` from events of type `E`.
    pub fn unsubscribe_from<E: Event>(&self, handler: &HandlerRef) {
        self.unsubscribe(EventKey::of::<E>(), handler);
    }

    /// Publishes an event to every handler subscribed to its type.
    ///
    /// Returns without waiting for any handler. With no subscribers this is a
    /// silent no-op.
    pub fn publish<E: Event>(&self, event: E) {
        self.publish_ref(Arc::new(event));
    }

    /// Publishes an already shared event.
    ///
    /// The key is taken from the concrete type behind the `Arc`, so this routes
    /// exactly like [`Bus::publish`] with the unwrapped value.
    pub fn publish_ref(&self, event: EventRef) {
        let key = EventKey::of_val(event.as_ref());
        let handlers = self.inner.registry.snapshot(key);

        if handlers.is_empty() {
            tracing::trace!(bus = %self.inner.cfg.name, event = key.name(), "no subscribers");
            return;
        }

        tracing::trace!(
            bus = %self.inner.cfg.name,
            event = key.name(),
            handlers = handlers.len(),
            "publish"
        );

        for handler in handlers {
            if let Err(err) = self.inner.dispatcher.dispatch(handler, Arc::clone(&event)) {
                tracing::error!(
                    bus = %self.inner.cfg.name,
                    event = key.name(),
                    handler = err.handler(),
                    label = err.as_label(),
                    error = %err,
                    "dispatch failed"
                );
            }
        }
    }

    /// Handlers subscribed to `key`, or `None` if nothing is subscribed.
    ///
    /// "Never subscribed" and "all handlers removed" both return `None`.
    pub fn subscribers(&self, key: EventKey) -> Option<Vec<HandlerRef>> {
        self.inner.registry.lookup(key)
    }

    /// True if `handler` is subscribed to `key`.
    pub fn has_subscriber(&self, key: EventKey, handler: &HandlerRef) -> bool {
        self.inner.registry.contains(key, handler)
    }

    /// Number of handlers subscribed to `key`.
    pub fn subscriber_count(&self, key: EventKey) -> usize {
        self.inner.registry.count(key)
    }

    /// Number of event keys with at least one handler.
    pub fn len(&self) -> usize {
        self.inner.registry.len()
    }

    /// True if no handler is subscribed to anything.
    pub fn is_empty(&self) -> bool {
        self.inner.registry.is_empty()
    }

    pub(crate) fn downgrade(&self) -> WeakBus {
        WeakBus(Arc::downgrade(&self.inner))
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("name", &self.inner.cfg.name)
            .field("keys", &self.len())
            .finish()
    }
}

/// Non-owning reference to a bus, used by [`Subscription`].
#[derive(Clone)]
pub(crate) struct WeakBus(Weak<Inner>);

impl WeakBus {
    pub(crate) fn upgrade(&self) -> Option<Bus> {
        self.0.upgrade().map(|inner| Bus { inner })
    }
}
