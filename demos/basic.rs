//! # Example: basic
//!
//! Subscribes one handler to two event types and publishes a mix of events.
//!
//! Shows how to:
//! - Implement [`Handler`] and recover the concrete event with `downcast_ref`.
//! - Route by type: an event type nobody subscribed to is silently dropped.
//! - Unsubscribe and observe that the key disappears.
//!
//! ## Flow
//! ```text
//! subscribe(Deposit, ledger) ─┐
//! subscribe(Withdrawal, ledger) ┤
//!                               ▼
//! publish(Deposit)    ──► ledger.on_event()   (own task)
//! publish(Withdrawal) ──► ledger.on_event()   (own task)
//! publish(Audit)      ──► (no subscribers)
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=eventbus=trace cargo run --example basic
//! ```

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use eventbus::{Bus, Event, EventKey, EventRef, Handler, HandlerRef};

struct Deposit {
    cents: i64,
}
impl Event for Deposit {}

struct Withdrawal {
    cents: i64,
}
impl Event for Withdrawal {}

struct Audit;
impl Event for Audit {}

/// Keeps a running balance of every deposit and withdrawal it sees.
#[derive(Default)]
struct Ledger {
    balance: AtomicI64,
    seen: AtomicU32,
}

#[async_trait::async_trait]
impl Handler for Ledger {
    async fn on_event(&self, ev: &EventRef) {
        if let Some(d) = ev.downcast_ref::<Deposit>() {
            self.balance.fetch_add(d.cents, Ordering::SeqCst);
        } else if let Some(w) = ev.downcast_ref::<Withdrawal>() {
            self.balance.fetch_sub(w.cents, Ordering::SeqCst);
        }
        self.seen.fetch_add(1, Ordering::SeqCst);
        println!("[ledger] handled {}", ev.name());
    }

    fn name(&self) -> &str {
        "ledger"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bus = Bus::new();
    let ledger = Arc::new(Ledger::default());
    let handler = HandlerRef::from(Arc::clone(&ledger));

    bus.subscribe_to::<Deposit>(&handler);
    bus.subscribe_to::<Withdrawal>(&handler);
    // Subscribing again is a no-op.
    bus.subscribe_to::<Deposit>(&handler);

    bus.publish(Deposit { cents: 10_000 });
    bus.publish(Withdrawal { cents: 2_500 });
    bus.publish(Audit);

    // Publish never waits; poll until both invocations have run.
    tokio::time::timeout(Duration::from_secs(1), async {
        while ledger.seen.load(Ordering::SeqCst) < 2 {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await?;

    println!(
        "balance={} handled={}",
        ledger.balance.load(Ordering::SeqCst),
        ledger.seen.load(Ordering::SeqCst)
    );

    bus.unsubscribe_from::<Deposit>(&handler);
    bus.unsubscribe_from::<Withdrawal>(&handler);
    println!(
        "deposit subscribers after unsubscribe: {:?}",
        bus.subscribers(EventKey::of::<Deposit>()).map(|s| s.len())
    );

    Ok(())
}
