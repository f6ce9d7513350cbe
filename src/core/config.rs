//! # Bus configuration.
//!
//! Provides [`Config`], the settings for one [`Bus`](crate::Bus) instance.
//!
//! Config is used in two ways:
//! 1. **Implicitly**: `Bus::new()` / `Bus::default()` use `Config::default()`
//! 2. **Explicitly**: `Bus::with_config(config)`
//!
//! ## Dispatch strategies
//! - `Dispatch::Auto` → Tokio task on the caller's runtime, OS thread otherwise
//! - `Dispatch::Runtime(handle)` → always a Tokio task on `handle`
//! - `Dispatch::Threads` → always one OS thread per handler invocation

use std::borrow::Cow;

use tokio::runtime::Handle;

/// Where handler invocations run.
///
/// Every strategy is fire-and-forget: the publisher never joins the spawned
/// unit and never sees its outcome.
#[derive(Clone, Debug, Default)]
pub enum Dispatch {
    /// Spawn on the ambient Tokio runtime if `publish` is called from inside
    /// one; otherwise fall back to [`Dispatch::Threads`].
    ///
    /// In the fallback case the handler future is driven by a local executor,
    /// so handlers that rely on Tokio resources (timers, sockets) panic when
    /// `publish` is called outside a runtime.
    #[default]
    Auto,

    /// Spawn every invocation on this runtime, wherever `publish` is called from.
    Runtime(Handle),

    /// Run every invocation on its own OS thread, driving the handler future
    /// with a local executor. Handlers that rely on Tokio resources (timers,
    /// sockets) must not be used with this strategy.
    Threads,
}

/// Configuration for a bus instance.
///
/// ## Field semantics
/// - `name`: label attached to every log record (`bus` field) and to dispatch thread names
/// - `dispatch`: where handler invocations run (see [`Dispatch`])
///
/// ## Notes
/// All fields are public for flexibility. There is no file or environment
/// layer; build the value in code.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bus label for logs and thread names.
    pub name: Cow<'static, str>,

    /// Dispatch strategy for handler invocations.
    pub dispatch: Dispatch,
}

impl Config {
    /// Returns the name given to dispatch threads (`<name>-dispatch`).
    #[inline]
    pub fn thread_name(&self) -> String {
        format!("{}-dispatch", self.name)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `name = "eventbus"`
    /// - `dispatch = Dispatch::Auto`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("eventbus"),
            dispatch: Dispatch::Auto,
        }
    }
}
