//! # eventbus
//!
//! **eventbus** is an in-process publish/subscribe registry for Rust.
//!
//! Producers publish typed events; consumers subscribe a handler to an event
//! *type* and are notified asynchronously, each in its own detached unit of
//! execution, whenever an event of that type is published. Delivery is
//! best-effort, fire-and-forget and memory-only.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Handler    │   │   Handler    │   │   Handler    │
//!     │  (consumer)  │   │  (consumer)  │   │  (consumer)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ subscribe(EventKey::of::<E>(), &handler)
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Bus                                                              │
//! │  - Registry: RwLock<HashMap<EventKey, HashSet<HandlerRef>>>       │
//! │  - Dispatcher: Tokio task or OS thread per invocation             │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▲
//!     publish(e) ────────────────┘  key = EventKey::of_val(&e)
//!                                   snapshot under read lock
//!                                   spawn h.on_event(&e) for each h, return
//! ```
//!
//! ### Lifecycle
//! ```text
//! Bus::new() ──► subscribe / unsubscribe / publish (any thread, any order)
//!
//! publish(e):
//!   ├─► K = type key of e
//!   ├─► read lock → copy handlers of K → release
//!   ├─► none  ─► return (silent)
//!   └─► each  ─► Dispatcher::dispatch(h, e)   (not awaited, outcome ignored)
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                    |
//! |-------------------|--------------------------------------------------------------|---------------------------------------|
//! | **Events**        | Any `'static + Send + Sync` type, routed by its type.        | [`Event`], [`EventKey`], [`EventRef`] |
//! | **Handlers**      | Async consumers compared by identity.                        | [`Handler`], [`HandlerRef`], [`HandlerFn`] |
//! | **Bus**           | Subscribe, unsubscribe, publish, lookups.                    | [`Bus`], [`Subscription`]             |
//! | **Configuration** | Bus label and dispatch strategy.                             | [`Config`], [`Dispatch`]              |
//! | **Errors**        | Internal dispatch failures (logged, never returned).         | [`DispatchError`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] handler _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::time::Duration;
//! use eventbus::{Bus, Event, EventKey, EventRef, Handler, HandlerRef};
//!
//! struct OrderPlaced { total: u32 }
//! impl Event for OrderPlaced {}
//!
//! #[derive(Default)]
//! struct Revenue(AtomicU32);
//!
//! #[async_trait::async_trait]
//! impl Handler for Revenue {
//!     async fn on_event(&self, event: &EventRef) {
//!         if let Some(order) = event.downcast_ref::<OrderPlaced>() {
//!             self.0.fetch_add(order.total, Ordering::SeqCst);
//!         }
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let bus = Bus::new();
//!     let revenue = Arc::new(Revenue::default());
//!     let handler = HandlerRef::from(Arc::clone(&revenue));
//!
//!     bus.subscribe(EventKey::of::<OrderPlaced>(), &handler);
//!     bus.publish(OrderPlaced { total: 30 });
//!     bus.publish(OrderPlaced { total: 12 });
//!
//!     // Publish does not wait; give the handlers a moment to run.
//!     while revenue.0.load(Ordering::SeqCst) < 42 {
//!         tokio::time::sleep(Duration::from_millis(5)).await;
//!     }
//!
//!     bus.unsubscribe(EventKey::of::<OrderPlaced>(), &handler);
//!     assert!(bus.subscribers(EventKey::of::<OrderPlaced>()).is_none());
//! }
//! ```
mod core;
mod error;
mod events;
mod handlers;

#[cfg(test)]
mod testkit;

// ---- Public re-exports ----

pub use crate::core::{Bus, Config, Dispatch, Subscription};
pub use error::DispatchError;
pub use events::{Event, EventKey, EventRef};
pub use handlers::{Handler, HandlerFn, HandlerRef};

// Blanket-implemented support trait of `Event`; public only so the bound is nameable.
#[doc(hidden)]
pub use events::EventAny;

// Optional: expose a simple built-in logger handler (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::LogWriter;
