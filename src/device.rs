use crate::config::ZoneConfig;
use crate::controller::AmpController;
use crate::error::Result;
use crate::types::{PowerState, SupportedFeatures, VolumeLevel, ZoneId, DEFAULT_AMP_ID};
use std::fmt;
use std::sync::Arc;

/// Media-player adapter for one amplifier zone
///
/// A `ZoneDevice` exposes power, volume, mute and source selection for a
/// single zone, translating each call into a command on the shared
/// controller connection.
///
/// Power state and volume are a local cache of the last command issued by
/// this adapter. They are never read back from the controller, so they drift
/// if the zone is changed out-of-band.
pub struct ZoneDevice {
    name: String,
    zone_id: ZoneId,
    state: PowerState,
    volume: VolumeLevel,
    sources: Arc<[String]>,
    controller: Arc<dyn AmpController>,
}

impl ZoneDevice {
    /// Create an adapter for `zone_id`, sharing `controller` and `sources` with its siblings
    pub fn new(
        controller: Arc<dyn AmpController>,
        sources: Arc<[String]>,
        zone_id: ZoneId,
        zone: &ZoneConfig,
    ) -> Self {
        Self {
            name: zone.name.clone(),
            zone_id,
            state: PowerState::Off,
            volume: 0.0,
            sources,
            controller,
        }
    }

    /// Get the zone name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the controller zone id
    pub fn zone_id(&self) -> ZoneId {
        self.zone_id
    }

    /// Get the last power state set through this adapter
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Get the last volume set through this adapter, on the 0-100 scale
    pub fn volume_level(&self) -> VolumeLevel {
        self.volume
    }

    /// Get the selectable source names, in configured order
    pub fn source_list(&self) -> &[String] {
        &self.sources
    }

    pub fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::MONOPRICE
    }

    // ========== Power Control ==========

    /// Switch the zone on
    ///
    /// The cached state becomes `on` once the controller call returns; the
    /// zone is not queried to confirm it.
    pub async fn turn_on(&mut self) -> Result<()> {
        self.set_power(PowerState::On).await
    }

    /// Switch the zone off
    pub async fn turn_off(&mut self) -> Result<()> {
        self.set_power(PowerState::Off).await
    }

    async fn set_power(&mut self, power: PowerState) -> Result<()> {
        tracing::debug!("Zone {} power {}", self.zone_id, power);

        self.controller
            .set_power(DEFAULT_AMP_ID, self.zone_id, power)
            .await?;
        self.state = power;
        Ok(())
    }

    // ========== Volume Control ==========

    /// Set the zone volume from a 0..1 level
    ///
    /// The level is scaled to the controller's 0-100 range without clamping;
    /// range checks are left to the controller client. The scaled value is
    /// cached before the command is sent.
    pub async fn set_volume_level(&mut self, volume: f64) -> Result<()> {
        let level = volume * 100.0;
        self.volume = level;

        tracing::debug!("Zone {} volume {}", self.zone_id, level);
        self.controller
            .set_volume(DEFAULT_AMP_ID, self.zone_id, level.round() as i32)
            .await
    }

    /// Toggle the zone's mute state
    ///
    /// The controller only supports toggling, so `_mute` is ignored and the
    /// mute state is not tracked.
    pub async fn mute_volume(&mut self, _mute: bool) -> Result<()> {
        tracing::debug!("Zone {} toggle mute", self.zone_id);
        self.controller.toggle_mute(DEFAULT_AMP_ID, self.zone_id).await
    }

    // ========== Input Selection ==========

    /// Select an input source by name
    ///
    /// Names that are not in the source list are ignored without error.
    pub async fn select_source(&mut self, source: &str) -> Result<()> {
        let Some(position) = self.sources.iter().position(|s| s == source) else {
            tracing::debug!("Zone {} ignoring unknown source {:?}", self.zone_id, source);
            return Ok(());
        };

        let index = position + 1;
        tracing::debug!("Zone {} source {} ({})", self.zone_id, index, source);
        self.controller
            .set_source(DEFAULT_AMP_ID, self.zone_id, index)
            .await
    }
}

impl fmt::Debug for ZoneDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoneDevice")
            .field("name", &self.name)
            .field("zone_id", &self.zone_id)
            .field("state", &self.state)
            .field("volume", &self.volume)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}
