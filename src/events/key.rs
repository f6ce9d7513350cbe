//! # EventKey: the type-derived routing identity.
//!
//! Subscriptions are indexed by [`EventKey`]. A key is built from a type
//! descriptor ([`TypeId`]), never from an instance, so:
//! - every instance of `E` routes to the same subscriber set;
//! - a different type routes elsewhere, even if it has the same fields.
//!
//! ```rust
//! use eventbus::{Event, EventKey};
//!
//! struct Primary;
//! struct Secondary;
//! impl Event for Primary {}
//! impl Event for Secondary {}
//!
//! assert_eq!(EventKey::of::<Primary>(), EventKey::of_val(&Primary));
//! assert_ne!(EventKey::of::<Primary>(), EventKey::of::<Secondary>());
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::event::Event;

/// Routing key derived from an event type.
///
/// Equality and hashing use only the [`TypeId`]; the type name is carried for logs.
#[derive(Clone, Copy)]
pub struct EventKey {
    id: TypeId,
    name: &'static str,
}

impl EventKey {
    /// Key of the event type `E`.
    #[inline]
    pub fn of<E: Event>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    /// Key of the concrete type behind `event`.
    ///
    /// Goes through the trait object, so `Arc<dyn Event>` holding an `E`
    /// yields `EventKey::of::<E>()`.
    #[inline]
    pub fn of_val(event: &dyn Event) -> Self {
        Self {
            id: event.concrete_type_id(),
            name: event.concrete_type_name(),
        }
    }

    /// Underlying type descriptor.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Rust type name of the event type (for logs).
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventKey {}

impl Hash for EventKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventKey").field(&self.name).finish()
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
