use crate::error::Result;
use crate::types::{AmpId, PowerState, SourceIndex, ZoneId};
use futures_util::future::BoxFuture;

/// Client for the amplifier controller's serial/network protocol
///
/// The wire protocol lives in an external client; this trait is the seam the
/// zone adapters drive it through. One connection is shared by every zone as
/// an `Arc<dyn AmpController>`.
///
/// Implementations receive commands from several zones over the same
/// connection. Adapters issue at most one command per zone at a time, but
/// serializing commands *across* zones (a mutex or a single-writer queue
/// around the transport) is up to the implementation.
///
/// Errors returned from command methods are propagated to the caller of the
/// zone operation unchanged.
pub trait AmpController: Send + Sync {
    /// Open the transport to the controller
    fn connect(&self) -> BoxFuture<'_, Result<()>>;

    /// Whether the transport is currently connected
    fn is_connected(&self) -> bool;

    /// Switch a zone on or off (`"1"`/`"0"` on the wire, see [`PowerState::as_flag`])
    fn set_power(&self, amp_id: AmpId, zone_id: ZoneId, power: PowerState) -> BoxFuture<'_, Result<()>>;

    /// Set a zone's volume on the controller's 0-100 scale
    fn set_volume(&self, amp_id: AmpId, zone_id: ZoneId, level: i32) -> BoxFuture<'_, Result<()>>;

    /// Toggle a zone's mute state
    fn toggle_mute(&self, amp_id: AmpId, zone_id: ZoneId) -> BoxFuture<'_, Result<()>>;

    /// Select a zone's input by 1-based source index
    fn set_source(&self, amp_id: AmpId, zone_id: ZoneId, index: SourceIndex) -> BoxFuture<'_, Result<()>>;
}
