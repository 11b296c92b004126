//! Media-player zone adapters for Monoprice six-zone whole-home audio controllers
//!
//! This library exposes each zone of a multi-zone amplifier as a media-player
//! device for a home-automation host. It supports:
//!
//! - Validating the controller configuration (host, port, zones, sources)
//! - Connecting once and sharing the connection across every zone
//! - Power, volume, mute toggle and source selection per zone
//!
//! The amplifier's wire protocol is not implemented here. It is reached
//! through the [`AmpController`] trait, implemented by an external client.
//!
//! # Quick Start
//!
//! ```no_run
//! use futures_util::future::BoxFuture;
//! use monoprice_zones::{setup_platform, AmpController, AmpId, PowerState, SourceIndex, ZoneId};
//! use std::sync::Arc;
//!
//! struct SerialBridge;
//!
//! impl AmpController for SerialBridge {
//!     fn connect(&self) -> BoxFuture<'_, monoprice_zones::Result<()>> {
//!         Box::pin(async { Ok(()) })
//!     }
//!     fn is_connected(&self) -> bool {
//!         true
//!     }
//!     fn set_power(&self, _: AmpId, _: ZoneId, _: PowerState) -> BoxFuture<'_, monoprice_zones::Result<()>> {
//!         Box::pin(async { Ok(()) })
//!     }
//!     fn set_volume(&self, _: AmpId, _: ZoneId, _: i32) -> BoxFuture<'_, monoprice_zones::Result<()>> {
//!         Box::pin(async { Ok(()) })
//!     }
//!     fn toggle_mute(&self, _: AmpId, _: ZoneId) -> BoxFuture<'_, monoprice_zones::Result<()>> {
//!         Box::pin(async { Ok(()) })
//!     }
//!     fn set_source(&self, _: AmpId, _: ZoneId, _: SourceIndex) -> BoxFuture<'_, monoprice_zones::Result<()>> {
//!         Box::pin(async { Ok(()) })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = serde_json::json!({
//!         "host": "192.168.1.50",
//!         "port": 4999,
//!         "name": "Whole House",
//!         "zones": { "11": { "name": "Kitchen" }, "12": { "name": "Patio" } },
//!         "sources": [ { "name": "Radio" }, { "name": "TV" } ]
//!     });
//!
//!     let mut zones = Vec::new();
//!     setup_platform(&config, |_, _| Arc::new(SerialBridge) as Arc<dyn AmpController>, |devices| zones.extend(devices)).await?;
//!
//!     if let Some(kitchen) = zones.first_mut() {
//!         kitchen.turn_on().await?;
//!         kitchen.set_volume_level(0.4).await?;
//!         kitchen.select_source("TV").await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Config**: validation of the host platform's configuration block
//! - **Platform**: setup entry point that connects and builds the zone devices
//! - **Device**: per-zone media-player adapter with locally cached state
//! - **Controller**: the seam to the external amplifier client

mod config;
mod controller;
mod device;
mod error;
mod platform;
mod types;

// Public exports
pub use config::{Config, SourceConfig, ZoneConfig};
pub use controller::AmpController;
pub use device::ZoneDevice;
pub use error::{MonopriceError, Result};
pub use platform::{setup_platform, setup_with_config};
pub use types::{
    AmpId, PowerState, SourceIndex, SupportedFeatures, VolumeLevel, ZoneId, DEFAULT_AMP_ID,
};
