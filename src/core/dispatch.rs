//! # Dispatcher: hands one handler invocation to an independent unit of execution.
//!
//! ```text
//! dispatch(handler, event)
//!    ├─ Dispatch::Runtime(h) ─────────────► h.spawn(notify)            (detached task)
//!    ├─ Dispatch::Threads ────────────────► thread::spawn(block_on(notify))
//!    └─ Dispatch::Auto
//!          ├─ Handle::try_current() = Ok ─► spawn on the caller's runtime
//!          └─ no runtime ─────────────────► thread::spawn(block_on(notify))
//! ```
//!
//! ## Rules
//! - Never joins, awaits or supervises the spawned unit.
//! - A panic inside `on_event` ends only that unit; Tokio records it in the
//!   (dropped) `JoinHandle`, a thread simply unwinds. Nothing is reported back.
//! - The only error is a failed OS thread spawn, returned as [`DispatchError`].

use std::thread;

use tokio::runtime::Handle;

use crate::core::config::{Config, Dispatch};
use crate::error::DispatchError;
use crate::events::EventRef;
use crate::handlers::HandlerRef;

/// Spawns handler invocations according to the configured [`Dispatch`].
#[derive(Debug)]
pub(crate) struct Dispatcher {
    mode: Dispatch,
    thread_name: String,
}

impl Dispatcher {
    pub(crate) fn new(cfg: &Config) -> Self {
        Self {
            mode: cfg.dispatch.clone(),
            thread_name: cfg.thread_name(),
        }
    }

    /// Starts `handler.on_event(event)` in its own unit and returns immediately.
    pub(crate) fn dispatch(
        &self,
        handler: HandlerRef,
        event: EventRef,
    ) -> Result<(), DispatchError> {
        match &self.mode {
            Dispatch::Runtime(rt) => {
                rt.spawn(notify(handler, event));
                Ok(())
            }
            Dispatch::Threads => self.spawn_thread(handler, event),
            Dispatch::Auto => match Handle::try_current() {
                Ok(rt) => {
                    rt.spawn(notify(handler, event));
                    Ok(())
                }
                Err(_) => self.spawn_thread(handler, event),
            },
        }
    }

    fn spawn_thread(&self, handler: HandlerRef, event: EventRef) -> Result<(), DispatchError> {
        let name = handler.name().to_owned();

        thread::Builder::new()
            .name(self.thread_name.clone())
            .spawn(move || futures::executor::block_on(notify(handler, event)))
            .map(drop)
            .map_err(|source| DispatchError::Spawn {
                handler: name,
                source,
            })
    }
}

async fn notify(handler: HandlerRef, event: EventRef) {
    handler.handler().on_event(&event).await;
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::*;
    use crate::events::Event;
    use crate::handlers::HandlerFn;

    struct Job(u8);
    impl Event for Job {}

    fn forwarding(tx: mpsc::Sender<(u8, Option<String>)>) -> HandlerRef {
        HandlerFn::arc("forward", move |ev: EventRef| {
            let tx = tx.clone();
            async move {
                let thread = thread::current().name().map(str::to_owned);
                if let Some(job) = ev.downcast_ref::<Job>() {
                    let _ = tx.send((job.0, thread));
                }
            }
        })
        .into()
    }

    #[test]
    fn threads_run_on_named_dispatch_thread() {
        let cfg = Config {
            name: "jobs".into(),
            dispatch: Dispatch::Threads,
        };
        let (tx, rx) = mpsc::channel();

        Dispatcher::new(&cfg)
            .dispatch(forwarding(tx), std::sync::Arc::new(Job(3)))
            .unwrap();

        let (id, thread) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(id, 3);
        assert_eq!(thread.as_deref(), Some("jobs-dispatch"));
    }

    #[test]
    fn auto_without_runtime_falls_back_to_threads() {
        let (tx, rx) = mpsc::channel();

        Dispatcher::new(&Config::default())
            .dispatch(forwarding(tx), std::sync::Arc::new(Job(5)))
            .unwrap();

        let (id, thread) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(id, 5);
        assert_eq!(thread.as_deref(), Some("eventbus-dispatch"));
    }

    #[test]
    fn runtime_handle_accepts_calls_from_foreign_threads() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("bus-rt")
            .build()
            .unwrap();
        let cfg = Config {
            dispatch: Dispatch::Runtime(rt.handle().clone()),
            ..Config::default()
        };
        let (tx, rx) = mpsc::channel();

        Dispatcher::new(&cfg)
            .dispatch(forwarding(tx), std::sync::Arc::new(Job(9)))
            .unwrap();

        let (id, thread) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(id, 9);
        assert_eq!(thread.as_deref(), Some("bus-rt"));
    }
}
