//! # Example: channel_handler
//!
//! A handler that forwards events out of the bus through a channel, plus a
//! scoped subscription that ends when its guard is dropped.
//!
//! ## Run
//! ```bash
//! cargo run --example channel_handler
//! ```

use std::time::Duration;

use eventbus::{Bus, Event, EventKey, EventRef, HandlerFn, HandlerRef};
use tokio::sync::mpsc;

struct SensorReading {
    sensor: &'static str,
    celsius: f32,
}
impl Event for SensorReading {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bus = Bus::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<EventRef>();

    let forward: HandlerRef = HandlerFn::arc("forward", move |ev: EventRef| {
        let tx = tx.clone();
        async move {
            let _ = tx.send(ev);
        }
    })
    .into();

    {
        let _sub = bus.subscribe_scoped(EventKey::of::<SensorReading>(), &forward);

        bus.publish(SensorReading {
            sensor: "boiler",
            celsius: 81.5,
        });

        let ev = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await?
            .ok_or_else(|| anyhow::anyhow!("channel closed"))?;
        if let Some(r) = ev.downcast_ref::<SensorReading>() {
            println!("[main] {} reads {:.1}°C", r.sensor, r.celsius);
        }
    }

    // Guard dropped: this reading goes nowhere.
    bus.publish(SensorReading {
        sensor: "boiler",
        celsius: 82.0,
    });
    let late = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    println!("[main] delivered after guard dropped: {}", late.is_ok());

    Ok(())
}
