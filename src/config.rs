use crate::error::{MonopriceError, Result};
use crate::types::ZoneId;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

pub const CONF_HOST: &str = "host";
pub const CONF_PORT: &str = "port";
pub const CONF_NAME: &str = "name";
pub const CONF_ZONES: &str = "zones";
pub const CONF_SOURCES: &str = "sources";

/// Per-zone configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneConfig {
    /// Display name of the zone
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
}

/// Per-source configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Display name of the input source
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
}

/// Validated controller configuration
///
/// Built from the host platform's configuration block with
/// [`Config::from_value`] or from JSON text with [`Config::from_json_str`].
/// A `Config` that exists has passed validation; no connection is made while
/// building it.
///
/// # Example
///
/// ```
/// use monoprice_zones::Config;
///
/// let config = Config::from_json_str(r#"{
///     "host": "192.168.1.50",
///     "port": 4999,
///     "name": "Whole House",
///     "zones": { "11": { "name": "Kitchen" }, "12": { "name": "Patio" } },
///     "sources": [ { "name": "Radio" }, { "name": "TV" } ]
/// }"#).unwrap();
///
/// assert_eq!(config.zones.len(), 2);
/// assert_eq!(config.source_names(), vec!["Radio", "TV"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Display name of the whole controller (not used per zone)
    pub name: String,

    /// Zones keyed by controller zone id, in ascending id order
    pub zones: BTreeMap<ZoneId, ZoneConfig>,

    /// Sources in configured order; position defines the 1-based source index
    pub sources: Vec<SourceConfig>,
}

impl Config {
    /// Parse and validate configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_value(&json)
    }

    /// Parse and validate a raw configuration mapping
    ///
    /// A missing or invalid `host`/`port` is reported as
    /// [`MonopriceError::MissingHostOrPort`] before anything else is checked.
    pub fn from_value(json: &Value) -> Result<Self> {
        parse_config(json)
    }

    /// Source names in configured order
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name.clone()).collect()
    }
}

fn parse_config(json: &Value) -> Result<Config> {
    let obj = json
        .as_object()
        .ok_or_else(|| MonopriceError::InvalidConfig("expected a mapping".to_string()))?;

    let host = obj
        .get(CONF_HOST)
        .and_then(coerce_string)
        .filter(|s| !s.is_empty());
    let port = obj.get(CONF_PORT).and_then(parse_port);

    let (host, port) = match (host, port) {
        (Some(host), Some(port)) => (host, port),
        _ => return Err(MonopriceError::MissingHostOrPort),
    };

    let name = obj
        .get(CONF_NAME)
        .and_then(coerce_string)
        .ok_or_else(|| invalid(CONF_NAME, "expected a string"))?;

    let zones = obj
        .get(CONF_ZONES)
        .ok_or_else(|| invalid(CONF_ZONES, "required key not provided"))
        .and_then(parse_zones)?;

    let sources = obj
        .get(CONF_SOURCES)
        .ok_or_else(|| invalid(CONF_SOURCES, "required key not provided"))
        .and_then(parse_sources)?;

    Ok(Config {
        host,
        port,
        name,
        zones,
        sources,
    })
}

/// Scalars are accepted where a string is expected (`7` becomes `"7"`)
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    coerce_string(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid type: {}, expected a string", value))
    })
}

/// Accepts an integer, an integral float or a numeric string in 1..=65535
fn parse_port(value: &Value) -> Option<u16> {
    let port = match value {
        Value::Number(n) => match n.as_u64() {
            Some(port) => port,
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u16::MAX))
                .map(|f| f as u64)?,
        },
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    u16::try_from(port).ok().filter(|p| *p > 0)
}

fn parse_zones(value: &Value) -> Result<BTreeMap<ZoneId, ZoneConfig>> {
    let entries = value
        .as_object()
        .ok_or_else(|| invalid(CONF_ZONES, "expected a mapping of zone id to zone"))?;

    let mut zones = BTreeMap::new();
    for (key, entry) in entries {
        // Object keys are always strings; coerce them to zone ids
        let zone_id = key
            .trim()
            .parse::<ZoneId>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                invalid(CONF_ZONES, &format!("zone id '{}' is not a positive integer", key))
            })?;

        let zone: ZoneConfig = serde_json::from_value(entry.clone())
            .map_err(|e| invalid(&format!("{}.{}", CONF_ZONES, key), &e.to_string()))?;

        if zones.insert(zone_id, zone).is_some() {
            return Err(invalid(CONF_ZONES, &format!("duplicate zone id {}", zone_id)));
        }
    }

    Ok(zones)
}

fn parse_sources(value: &Value) -> Result<Vec<SourceConfig>> {
    // A single source object is promoted to a one-element list, null to an empty one
    let entries = match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().collect::<Vec<_>>(),
        Value::Object(_) => vec![value],
        _ => return Err(invalid(CONF_SOURCES, "expected a list of sources")),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry.clone())
                .map_err(|e| invalid(&format!("{}[{}]", CONF_SOURCES, i), &e.to_string()))
        })
        .collect()
}

fn invalid(key: &str, detail: &str) -> MonopriceError {
    MonopriceError::InvalidConfig(format!("{}: {}", key, detail))
}
