//! Drive every zone operation against a controller that only logs
//!
//! Usage: cargo run --example dry_run [config.json]

use futures_util::future::BoxFuture;
use monoprice_zones::{setup_platform, AmpController, AmpId, PowerState, SourceIndex, ZoneId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const DEFAULT_CONFIG: &str = r#"{
    "host": "127.0.0.1",
    "port": 4999,
    "name": "Whole House",
    "zones": {
        "11": { "name": "Kitchen" },
        "12": { "name": "Patio" }
    },
    "sources": [
        { "name": "Radio" },
        { "name": "TV" }
    ]
}"#;

struct LoggingController {
    address: String,
    connected: AtomicBool,
}

impl LoggingController {
    fn logged(&self, command: String) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        Box::pin(async move {
            tracing::info!("[{}] {}", self.address, command);
            Ok(())
        })
    }
}

impl AmpController for LoggingController {
    fn connect(&self) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        self.connected.store(true, Ordering::SeqCst);
        self.logged("connect".to_string())
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn set_power(&self, amp_id: AmpId, zone_id: ZoneId, power: PowerState) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        self.logged(format!("set_power amp={} zone={} power={}", amp_id, zone_id, power.as_flag()))
    }

    fn set_volume(&self, amp_id: AmpId, zone_id: ZoneId, level: i32) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        self.logged(format!("set_volume amp={} zone={} level={}", amp_id, zone_id, level))
    }

    fn toggle_mute(&self, amp_id: AmpId, zone_id: ZoneId) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        self.logged(format!("toggle_mute amp={} zone={}", amp_id, zone_id))
    }

    fn set_source(&self, amp_id: AmpId, zone_id: ZoneId, index: SourceIndex) -> BoxFuture<'_, monoprice_zones::Result<()>> {
        self.logged(format!("set_source amp={} zone={} index={}", amp_id, zone_id, index))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_CONFIG.to_string(),
    };
    let config: serde_json::Value = serde_json::from_str(&text)?;

    let mut zones = Vec::new();
    let count = setup_platform(
        &config,
        |host, port| {
            Arc::new(LoggingController {
                address: format!("{}:{}", host, port),
                connected: AtomicBool::new(false),
            }) as Arc<dyn AmpController>
        },
        |devices| zones.extend(devices),
    )
    .await?;
    println!("Registered {} zone(s)", count);

    for zone in &mut zones {
        zone.turn_on().await?;
        zone.set_volume_level(0.35).await?;
        zone.mute_volume(true).await?;
        if let Some(source) = zone.source_list().last().cloned() {
            zone.select_source(&source).await?;
        }
        zone.select_source("Not A Source").await?;

        println!(
            "{:>3} {:<12} state={} volume={} sources={:?}",
            zone.zone_id(),
            zone.name(),
            zone.state(),
            zone.volume_level(),
            zone.source_list()
        );

        zone.turn_off().await?;
    }

    Ok(())
}
