//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(EventRef) -> Fut`, producing a fresh
//! future per notification. The closure receives its own `Arc` of the event,
//! so the future can outlive the call and needs no borrowed state.
//!
//! ## Concurrency semantics
//! - Each notification creates a **new** future that owns its state.
//! - Invocations may overlap; if the closure needs shared state, capture an
//!   `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use eventbus::{Event, EventRef, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("printer", |ev: EventRef| async move {
//!     println!("got {}", ev.name());
//! })
//! .into();
//!
//! assert_eq!(h.name(), "printer");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::events::EventRef;
use crate::handlers::Handler;

/// Function-backed handler implementation.
///
/// Wraps a closure that *creates* a new future per notification.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when the handler is about to be subscribed.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the handler and returns it behind an `Arc`.
    ///
    /// Convert the result with `.into()` to get a [`HandlerRef`](crate::HandlerRef).
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(EventRef) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_event(&self, event: &EventRef) {
        (self.f)(Arc::clone(event)).await;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::events::Event;
    use crate::handlers::HandlerRef;

    struct Hit;
    impl Event for Hit {}

    #[tokio::test]
    async fn closure_runs_once_per_notification() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let h = HandlerFn::arc("counter", move |ev: EventRef| {
            let seen = Arc::clone(&seen);
            async move {
                if ev.is::<Hit>() {
                    seen.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        let ev: EventRef = Arc::new(Hit);
        h.on_event(&ev).await;
        h.on_event(&ev).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(h.name(), "counter");
    }

    #[test]
    fn converts_into_handler_ref() {
        let h: HandlerRef = HandlerFn::arc("noop", |_ev: EventRef| async {}).into();
        assert_eq!(h.name(), "noop");
    }
}
