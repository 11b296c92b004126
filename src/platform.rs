use crate::config::Config;
use crate::controller::AmpController;
use crate::device::ZoneDevice;
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Validate `config`, connect to the controller and register one device per zone
///
/// `connect` builds the controller client for the configured host and port;
/// it is only called once the configuration is valid. After the client's
/// `connect()` returns, its `is_connected()` status decides the outcome:
///
/// - connected: one [`ZoneDevice`] per configured zone is handed to
///   `add_devices` in a single call, all sharing the one connection;
/// - not connected: an error is logged, nothing is registered and `Ok(0)` is
///   returned. No retry is attempted.
///
/// Returns the number of registered devices. Configuration errors are logged
/// and returned before `connect` runs; an error from the client's `connect()`
/// itself is propagated.
///
/// # Example
///
/// ```no_run
/// # use monoprice_zones::{AmpController, setup_platform};
/// # use std::sync::Arc;
/// # async fn run(client: Arc<dyn AmpController>) -> monoprice_zones::Result<()> {
/// let config = serde_json::json!({
///     "host": "192.168.1.50",
///     "port": 4999,
///     "name": "Whole House",
///     "zones": { "11": { "name": "Kitchen" } },
///     "sources": [ { "name": "Radio" } ]
/// });
///
/// let mut zones = Vec::new();
/// setup_platform(&config, |_host, _port| client, |devices| zones.extend(devices)).await?;
///
/// for zone in &mut zones {
///     zone.turn_on().await?;
/// }
/// # Ok(())
/// # }
/// ```
pub async fn setup_platform<C, A>(config: &Value, connect: C, add_devices: A) -> Result<usize>
where
    C: FnOnce(&str, u16) -> Arc<dyn AmpController>,
    A: FnOnce(Vec<ZoneDevice>),
{
    let config = Config::from_value(config).inspect_err(|e| {
        tracing::error!("{}", e);
    })?;

    setup_with_config(&config, connect, add_devices).await
}

/// Same as [`setup_platform`] for an already validated [`Config`]
pub async fn setup_with_config<C, A>(config: &Config, connect: C, add_devices: A) -> Result<usize>
where
    C: FnOnce(&str, u16) -> Arc<dyn AmpController>,
    A: FnOnce(Vec<ZoneDevice>),
{
    tracing::info!("Connecting to {}:{}", config.host, config.port);

    let controller = connect(&config.host, config.port);
    controller.connect().await?;

    if !controller.is_connected() {
        tracing::error!("Not connected to {}:{}", config.host, config.port);
        return Ok(0);
    }

    let sources: Arc<[String]> = config.source_names().into();

    let devices: Vec<ZoneDevice> = config
        .zones
        .iter()
        .map(|(zone_id, zone)| ZoneDevice::new(controller.clone(), sources.clone(), *zone_id, zone))
        .collect();

    let count = devices.len();
    tracing::info!(
        "Registering {} zone(s) of {} at {}:{}",
        count,
        config.name,
        config.host,
        config.port
    );
    add_devices(devices);

    Ok(count)
}
