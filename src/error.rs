//! Error types used internally by the bus.
//!
//! The public bus operations (`subscribe`, `unsubscribe`, `publish`) are
//! infallible. The only failure the bus can run into on its own is handing a
//! handler invocation off to a new unit of execution; that is described by
//! [`DispatchError`], which is logged rather than returned to the publisher.
//!
//! Like the rest of the crate, the type provides `as_label` / `as_message`
//! helpers for structured logs.

use thiserror::Error;

/// # Errors produced while dispatching an event to a handler.
///
/// A dispatch error affects exactly one handler invocation. Other handlers
/// matched by the same publish are still dispatched.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A dedicated dispatch thread could not be spawned (resource exhaustion).
    #[error("failed to spawn dispatch thread for handler '{handler}': {source}")]
    Spawn {
        /// Name of the handler whose invocation was lost.
        handler: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventbus::DispatchError;
    ///
    /// let err = DispatchError::Spawn {
    ///     handler: "audit".into(),
    ///     source: std::io::Error::other("out of threads"),
    /// };
    /// assert_eq!(err.as_label(), "dispatch_spawn_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Spawn { .. } => "dispatch_spawn_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::Spawn { handler, source } => {
                format!("handler={handler} spawn error: {source}")
            }
        }
    }

    /// Name of the handler the failed dispatch was meant for.
    pub fn handler(&self) -> &str {
        match self {
            DispatchError::Spawn { handler, .. } => handler,
        }
    }
}
