//! Test helpers: a handler that forwards every event into a channel.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::events::EventRef;
use crate::handlers::{Handler, HandlerRef};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(50);

/// Forwards each received event to an unbounded channel.
pub(crate) struct Recorder {
    name: &'static str,
    tx: mpsc::UnboundedSender<EventRef>,
}

impl Recorder {
    pub(crate) fn channel(name: &'static str) -> (HandlerRef, mpsc::UnboundedReceiver<EventRef>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (HandlerRef::new(Recorder { name, tx }), rx)
    }
}

#[async_trait]
impl Handler for Recorder {
    async fn on_event(&self, event: &EventRef) {
        let _ = self.tx.send(Arc::clone(event));
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Waits for the next delivered event; panics after [`DELIVERY_TIMEOUT`].
pub(crate) async fn expect_event(rx: &mut mpsc::UnboundedReceiver<EventRef>) -> EventRef {
    match tokio::time::timeout(DELIVERY_TIMEOUT, rx.recv()).await {
        Ok(Some(ev)) => ev,
        Ok(None) => panic!("recorder channel closed"),
        Err(_) => panic!("no event delivered within {DELIVERY_TIMEOUT:?}"),
    }
}

/// Asserts nothing more is delivered within [`SILENCE_WINDOW`].
pub(crate) async fn expect_silence(rx: &mut mpsc::UnboundedReceiver<EventRef>) {
    if let Ok(Some(ev)) = tokio::time::timeout(SILENCE_WINDOW, rx.recv()).await {
        panic!("unexpected delivery of {}", ev.name());
    }
}
