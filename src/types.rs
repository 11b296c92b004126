use bitflags::bitflags;
use std::fmt;

/// Zone identifier as understood by the controller (e.g. 11..16 for the first unit)
pub type ZoneId = u32;

/// Controller unit identifier
pub type AmpId = u8;

/// 1-based position of a source in the configured source list
pub type SourceIndex = usize;

/// Volume level on the controller's 0-100 scale
pub type VolumeLevel = f64;

/// The single controller unit every zone adapter addresses
pub const DEFAULT_AMP_ID: AmpId = 1;

/// Power state of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Zone is switched off (initial state of every adapter)
    #[default]
    Off,

    /// Zone is switched on
    On,
}

impl PowerState {
    /// Power flag sent to the controller (`"1"` for on, `"0"` for off)
    pub fn as_flag(&self) -> &'static str {
        match self {
            PowerState::On => "1",
            PowerState::Off => "0",
        }
    }

    /// Check whether the zone is switched on
    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerState::On => f.write_str("on"),
            PowerState::Off => f.write_str("off"),
        }
    }
}

bitflags! {
    /// Media-player features a zone advertises to the host platform
    ///
    /// Bit values match the host platform's media-player feature flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SupportedFeatures: u32 {
        const VOLUME_SET = 4;
        const VOLUME_MUTE = 8;
        const TURN_ON = 128;
        const TURN_OFF = 256;
        const SELECT_SOURCE = 2048;
    }
}

impl SupportedFeatures {
    /// Feature set of every Monoprice zone
    pub const MONOPRICE: SupportedFeatures = SupportedFeatures::VOLUME_SET
        .union(SupportedFeatures::VOLUME_MUTE)
        .union(SupportedFeatures::TURN_ON)
        .union(SupportedFeatures::TURN_OFF)
        .union(SupportedFeatures::SELECT_SOURCE);
}
