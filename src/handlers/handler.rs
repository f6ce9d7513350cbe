//! # Core handler trait and handler identity
//!
//! `Handler` is the extension point for consumers. The bus invokes
//! [`Handler::on_event`] once per matched publish, each time from its own
//! detached unit of execution (Tokio task or OS thread, see `core/dispatch.rs`).
//!
//! ## Contract
//! - Implementations may be slow (I/O, retries); they do **not** block the
//!   publisher nor other handlers.
//! - Nothing is returned to the bus. A panic ends that one invocation and is
//!   visible only through the process panic hook.
//! - Invocations of one handler may overlap and may observe events out of
//!   publish order.
//!
//! ## Identity
//! The bus stores [`HandlerRef`]s and compares them by the address of the
//! shared allocation, not by handler state. Clone a `HandlerRef` to refer to
//! the same handler again (e.g. to unsubscribe it).
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventbus::{Event, EventRef, Handler, HandlerRef};
//!
//! struct Tick;
//! impl Event for Tick {}
//!
//! #[derive(Default)]
//! struct TickCounter(AtomicUsize);
//!
//! #[async_trait::async_trait]
//! impl Handler for TickCounter {
//!     async fn on_event(&self, event: &EventRef) {
//!         if event.is::<Tick>() {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "tick-counter"
//!     }
//! }
//!
//! let a = HandlerRef::new(TickCounter::default());
//! let b = HandlerRef::new(TickCounter::default());
//! assert_eq!(a, a.clone());
//! assert_ne!(a, b);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use async_trait::async_trait;

use crate::events::EventRef;

/// Contract for event handlers.
///
/// Called from a dispatch-dedicated task or thread. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Handle a single published event.
    ///
    /// # Parameters
    /// - `event`: shared event value; clone the `Arc` to keep it beyond the call
    async fn on_event(&self, event: &EventRef);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a registered handler.
///
/// Equality and hashing are by identity (allocation address).
#[derive(Clone)]
pub struct HandlerRef(Arc<dyn Handler>);

impl HandlerRef {
    /// Moves `handler` into a new shared allocation; the result is a new identity.
    pub fn new<H: Handler>(handler: H) -> Self {
        Self(Arc::new(handler))
    }

    /// Wraps an existing shared handler without changing its identity.
    pub fn from_arc(handler: Arc<dyn Handler>) -> Self {
        Self(handler)
    }

    /// Handler name (for logs).
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// The shared handler.
    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.0
    }

    /// Identity of this handler; stable while any clone is alive.
    #[inline]
    fn addr(&self) -> usize {
        // Data pointer only; vtable pointers are not a reliable identity.
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl<H: Handler> From<Arc<H>> for HandlerRef {
    fn from(handler: Arc<H>) -> Self {
        Self(handler)
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for HandlerRef {}

impl Hash for HandlerRef {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRef")
            .field("name", &self.name())
            .field("addr", &format_args!("{:#x}", self.addr()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Noop;

    #[async_trait]
    impl Handler for Noop {
        async fn on_event(&self, _event: &EventRef) {}
    }

    #[test]
    fn clones_share_identity() {
        let h = HandlerRef::new(Noop);
        let again = h.clone();

        assert_eq!(h, again);

        let mut set = HashSet::new();
        set.insert(h);
        assert!(!set.insert(again));
    }

    #[test]
    fn equal_values_are_distinct_handlers() {
        // Zero-sized handlers still get distinct allocations.
        let a = HandlerRef::new(Noop);
        let b = HandlerRef::new(Noop);

        assert_ne!(a, b);
    }

    #[test]
    fn from_arc_keeps_identity() {
        let shared = Arc::new(Noop);
        let a = HandlerRef::from(Arc::clone(&shared));
        let b = HandlerRef::from(shared);
        let c = HandlerRef::from_arc(a.handler().clone());

        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn name_defaults_to_type_name() {
        let h = HandlerRef::new(Noop);
        assert!(h.name().ends_with("Noop"));
        assert!(format!("{h:?}").contains("Noop"));
    }
}
