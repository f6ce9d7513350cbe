//! # Event handlers for the bus.
//!
//! This module provides the [`Handler`] trait, the [`HandlerRef`] identity the
//! bus indexes subscriptions by, and a closure-backed [`HandlerFn`].
//!
//! ## Architecture
//! ```text
//! Dispatch:
//!   Bus::publish(E) ──► snapshot(EventKey::of::<E>()) ──► [h1, h2, ... hN]
//!                                                           │   │       │
//!                                         (one detached unit per handler)
//!                                                           ▼   ▼       ▼
//!                                                  h.on_event(&EventRef)
//! ```
//!
//! ## Implementing custom handlers
//! ```no_run
//! use eventbus::{Event, EventRef, Handler};
//! use async_trait::async_trait;
//!
//! struct Deposit { cents: u64 }
//! impl Event for Deposit {}
//!
//! struct Ledger;
//!
//! #[async_trait]
//! impl Handler for Ledger {
//!     async fn on_event(&self, event: &EventRef) {
//!         if let Some(d) = event.downcast_ref::<Deposit>() {
//!             // book d.cents ...
//!             let _ = d.cents;
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod embedded;
mod handler;
mod handler_fn;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use handler::{Handler, HandlerRef};
pub use handler_fn::HandlerFn;
