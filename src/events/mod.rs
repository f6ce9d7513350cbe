//! Events: the publishable capability and its routing key.
//!
//! ## Contents
//! - [`Event`], [`EventRef`] publishable values and their shared, type-erased form
//! - [`EventKey`] type-derived identity used to index subscriptions
//!
//! Routing is always by type. See `core/mod.rs` for how the bus uses the key.

mod event;
mod key;

pub use event::{Event, EventAny, EventRef};
pub use key::EventKey;
