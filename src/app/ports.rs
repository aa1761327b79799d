//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ NodeService (domain)
//! ```
//!
//! Driven adapters (pins, clocks, sensors, actuators, display, event sinks)
//! implement these traits. The [`NodeService`](super::service::NodeService)
//! and the [`PulseDecoder`](crate::sensors::dht::PulseDecoder) consume them
//! via generics, so the domain core never touches hardware directly and
//! every timing-sensitive path can be driven by a simulated clock in tests.

use crate::error::DecodeError;
use crate::sensors::SensorReading;

// ───────────────────────────────────────────────────────────────
// Pin-level and timing primitives
// ───────────────────────────────────────────────────────────────

/// A shared bidirectional single-wire data line with an external pull-up.
///
/// No debouncing is performed; `is_high` samples the pin as-is.
pub trait DataLine {
    /// Switch to output mode and drive the line low.
    fn drive_low(&mut self);

    /// Switch to input mode, letting the pull-up raise the line.
    fn release(&mut self);

    /// Sample the current line level.
    fn is_high(&mut self) -> bool;
}

/// Monotonic microsecond time source.
pub trait Clock {
    /// Microseconds since boot (monotonic).
    fn now_us(&mut self) -> u64;

    /// Milliseconds since boot (monotonic).
    fn now_ms(&mut self) -> u64 {
        self.now_us() / 1000
    }
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain raw inputs.
pub trait SensorPort {
    /// Sample the three manual mode selectors. `true` = asserted.
    fn read_selectors(&mut self) -> [bool; 3];

    /// Raw ambient light sample from the ADC.
    fn read_light_level(&mut self) -> u16;

    /// Motion detector level.
    fn read_motion(&mut self) -> bool;

    /// Run one blocking climate sensor decode.
    fn read_climate(&mut self) -> Result<SensorReading, DecodeError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Switch the ventilation output.
    fn set_vent(&mut self, on: bool);

    /// Switch the lamp output.
    fn set_lamp(&mut self, on: bool);

    /// Kill all outputs.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Two-line character display sink. Exposes no feedback.
pub trait DisplayPort {
    fn show(&mut self, line1: &str, line2: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
