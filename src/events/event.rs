//! # Event capability.
//!
//! Any `'static + Send + Sync` type can travel over the bus once it opts in with
//! an empty `impl Event for T {}`. Routing never looks at the value itself: the
//! bus only asks for the value's concrete type (see [`EventKey`]).
//!
//! Handlers receive events as [`EventRef`] (`Arc<dyn Event>`) and recover the
//! concrete type with [`downcast_ref`](trait.Event.html#method.downcast_ref).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventbus::{Event, EventKey, EventRef};
//!
//! struct UserJoined { name: String }
//! impl Event for UserJoined {}
//!
//! let ev: EventRef = Arc::new(UserJoined { name: "ada".into() });
//!
//! assert_eq!(ev.key(), EventKey::of::<UserJoined>());
//! assert!(ev.is::<UserJoined>());
//! assert_eq!(ev.downcast_ref::<UserJoined>().map(|u| u.name.as_str()), Some("ada"));
//! ```

use std::any::{Any, TypeId};
use std::sync::Arc;

use super::key::EventKey;

/// Shared, type-erased event value handed to every matched handler.
pub type EventRef = Arc<dyn Event>;

/// Type descriptor access for events.
///
/// Blanket-implemented for every `'static + Send + Sync` type; not meant to be
/// implemented or called directly. Calls go through the `dyn Event` vtable, so
/// the answers describe the concrete event type even behind `Arc<dyn Event>`.
#[doc(hidden)]
pub trait EventAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn concrete_type_id(&self) -> TypeId;
    fn concrete_type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync> EventAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn concrete_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn concrete_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A value that can be published on the bus.
///
/// The routing key is derived from the implementing type only. Two instances
/// of the same type always reach the same subscribers; two structurally
/// identical types never share subscribers.
pub trait Event: EventAny {
    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        self.concrete_type_name()
    }
}

impl dyn Event {
    /// Routing key of this value's concrete type.
    pub fn key(&self) -> EventKey {
        EventKey::of_val(self)
    }

    /// True if the concrete type of this event is `E`.
    pub fn is<E: Event>(&self) -> bool {
        self.concrete_type_id() == TypeId::of::<E>()
    }

    /// Borrows the event as its concrete type, if it is an `E`.
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }
}

impl std::fmt::Debug for dyn Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Event").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping {
        seq: u32,
    }
    impl Event for Ping {}

    struct Pong;
    impl Event for Pong {
        fn name(&self) -> &'static str {
            "pong"
        }
    }

    #[test]
    fn downcast_recovers_payload() {
        let ev: EventRef = Arc::new(Ping { seq: 7 });

        assert!(ev.is::<Ping>());
        assert!(!ev.is::<Pong>());
        assert_eq!(ev.downcast_ref::<Ping>().map(|p| p.seq), Some(7));
        assert!(ev.downcast_ref::<Pong>().is_none());
    }

    #[test]
    fn name_defaults_to_type_name() {
        let ping: EventRef = Arc::new(Ping { seq: 0 });
        let pong: EventRef = Arc::new(Pong);

        assert!(ping.name().ends_with("Ping"));
        assert_eq!(pong.name(), "pong");
        assert_eq!(format!("{pong:?}"), "Event(\"pong\")");
    }
}
