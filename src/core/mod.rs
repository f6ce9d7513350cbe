//! Bus core: registry, dispatch and the public [`Bus`] handle.
//!
//! The public API from this module is [`Bus`], [`Subscription`], [`Config`]
//! and [`Dispatch`].
//!
//! Internal modules:
//! - [`registry`]: `EventKey` → handler-set mapping behind one `RwLock`;
//! - [`dispatch`]: spawns one detached unit per handler invocation;
//! - [`bus`]: subscribe / unsubscribe / publish on top of the two;
//! - [`subscription`]: RAII guard for scoped subscriptions;
//! - [`config`]: per-bus settings.

mod bus;
mod config;
mod dispatch;
mod registry;
mod subscription;

pub use bus::Bus;
pub use config::{Config, Dispatch};
pub use subscription::Subscription;
