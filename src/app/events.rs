//! Outbound application events.
//!
//! The [`NodeService`](super::service::NodeService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them; the firmware logs them to the serial console.

use crate::control::Mode;
use crate::error::DecodeError;

/// Where a mode change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// One of the three manual selector inputs.
    Selector,
    /// A `SETMODE` command on the serial link.
    Remote,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started(Mode),

    /// The operating mode changed.
    ModeChanged {
        from: Mode,
        to: Mode,
        source: ModeSource,
    },

    /// A climate sensor decode failed; ventilation is off this cycle.
    SensorFault(DecodeError),

    /// The climate sensor answered again after one or more failures.
    SensorRecovered,

    /// The lamp latch was pushed out to a new deadline.
    LampLatched { expires_at_ms: u64 },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryData {
    pub mode: Mode,
    pub vent_on: bool,
    pub lamp_on: bool,
    /// Last good temperature (tenths °C); `None` before the first success.
    pub temperature_tenths: Option<u16>,
    /// Last good humidity (tenths %); `None` before the first success.
    pub humidity_tenths: Option<u16>,
    pub light_level: u16,
    pub motion: bool,
    pub lamp_latch_expires_at_ms: u64,
    /// Consecutive failed decodes (0 when the sensor is healthy).
    pub sensor_failures: u32,
}
