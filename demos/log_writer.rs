//! # Example: log_writer
//!
//! Attaches the built-in [`LogWriter`] to a couple of event types and runs the
//! bus with thread dispatch, outside of any async runtime.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example log_writer --features logging
//! ```

use std::time::Duration;

use eventbus::{Bus, Config, Dispatch, Event, HandlerRef, LogWriter};

struct Started;
impl Event for Started {}

struct Stopped;
impl Event for Stopped {}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bus = Bus::with_config(Config {
        name: "lifecycle".into(),
        dispatch: Dispatch::Threads,
    });
    let log = HandlerRef::new(LogWriter::new());

    bus.subscribe_to::<Started>(&log);
    bus.subscribe_to::<Stopped>(&log);

    bus.publish(Started);
    bus.publish(Stopped);

    // Dispatch threads are detached; give them a moment before exiting.
    std::thread::sleep(Duration::from_millis(100));
}
