//! Shared test helpers

#![allow(dead_code)]

use futures_util::future::BoxFuture;
use monoprice_zones::{AmpController, AmpId, MonopriceError, PowerState, Result, SourceIndex, ZoneId};
use serde_json::{json, Value};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// Command observed by the recording controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Power(AmpId, ZoneId, &'static str),
    Volume(AmpId, ZoneId, i32),
    ToggleMute(AmpId, ZoneId),
    Source(AmpId, ZoneId, SourceIndex),
}

/// Builds the error a failing controller returns
pub type Failure = fn() -> MonopriceError;

/// Controller double that records every command it receives
#[derive(Default)]
pub struct RecordingController {
    connected: AtomicBool,
    refuse_connection: bool,
    connect_failure: Option<Failure>,
    command_failure: Mutex<Option<Failure>>,
    connect_calls: AtomicUsize,
    commands: Mutex<Vec<Command>>,
}

impl RecordingController {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A controller whose `connect()` succeeds but never reports connected
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            refuse_connection: true,
            ..Self::default()
        })
    }

    /// A controller whose `connect()` itself fails
    pub fn failing_connect(failure: Failure) -> Arc<Self> {
        Arc::new(Self {
            connect_failure: Some(failure),
            ..Self::default()
        })
    }

    /// Make every following command fail with `failure`
    pub fn fail_commands(&self, failure: Failure) {
        *self.command_failure.lock().unwrap() = Some(failure);
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, command: Command) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let failure = *self.command_failure.lock().unwrap();
            if let Some(failure) = failure {
                return Err(failure());
            }
            self.commands.lock().unwrap().push(command);
            Ok(())
        })
    }
}

impl AmpController for RecordingController {
    fn connect(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            self.connect_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(failure) = self.connect_failure {
                return Err(failure());
            }
            if !self.refuse_connection {
                self.connected.store(true, Ordering::SeqCst);
            }
            Ok(())
        })
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn set_power(&self, amp_id: AmpId, zone_id: ZoneId, power: PowerState) -> BoxFuture<'_, Result<()>> {
        self.record(Command::Power(amp_id, zone_id, power.as_flag()))
    }

    fn set_volume(&self, amp_id: AmpId, zone_id: ZoneId, level: i32) -> BoxFuture<'_, Result<()>> {
        self.record(Command::Volume(amp_id, zone_id, level))
    }

    fn toggle_mute(&self, amp_id: AmpId, zone_id: ZoneId) -> BoxFuture<'_, Result<()>> {
        self.record(Command::ToggleMute(amp_id, zone_id))
    }

    fn set_source(&self, amp_id: AmpId, zone_id: ZoneId, index: SourceIndex) -> BoxFuture<'_, Result<()>> {
        self.record(Command::Source(amp_id, zone_id, index))
    }
}

/// A valid three-zone, three-source configuration block
pub fn whole_house_config() -> Value {
    json!({
        "platform": "monoprice6z",
        "host": "192.168.1.50",
        "port": 4999,
        "name": "Whole House",
        "zones": {
            "11": { "name": "Kitchen" },
            "12": { "name": "Patio" },
            "13": { "name": "Office" }
        },
        "sources": [
            { "name": "Radio" },
            { "name": "TV" },
            { "name": "Chromecast" }
        ]
    })
}

pub fn sources(names: &[&str]) -> Arc<[String]> {
    names.iter().map(|n| n.to_string()).collect::<Vec<_>>().into()
}

/// Collects formatted log output of the current thread
///
/// `#[tokio::test]` runs on a current-thread runtime, so everything logged by
/// the code under test lands in the thread-local default subscriber.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Install a capturing subscriber until the returned guard is dropped
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();

        (capture, tracing::subscriber::set_default(subscriber))
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buffer.lock().unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Whether a line at `level` contains `message`
    pub fn contains(&self, level: &str, message: &str) -> bool {
        self.lines()
            .iter()
            .any(|line| line.contains(level) && line.contains(message))
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
