//! # LogWriter - simple event logger
//!
//! A minimal handler that writes every event it receives to `tracing` at INFO.
//! Subscribe it to the keys you want to watch. Use it for tests or demos.
//!
//! ## Example output (with `tracing-subscriber`'s fmt layer)
//! ```text
//! INFO eventbus::handlers::embedded::log: event received event="demo::UserJoined" key=demo::UserJoined
//! ```

use async_trait::async_trait;

use crate::events::EventRef;
use crate::handlers::Handler;

/// Event writer handler.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for LogWriter {
    async fn on_event(&self, e: &EventRef) {
        tracing::info!(event = e.name(), key = %e.key(), "event received");
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::events::Event;

    struct Noted;
    impl Event for Noted {}

    #[tokio::test]
    async fn logs_without_a_subscriber_installed() {
        let ev: EventRef = Arc::new(Noted);
        LogWriter::new().on_event(&ev).await;
        assert_eq!(LogWriter.name(), "LogWriter");
    }
}
