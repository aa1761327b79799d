//! Automation controller — turns inputs and elapsed time into actuator states.
//!
//! ## Rules
//!
//! | Output | Mode      | Rule                                              |
//! |--------|-----------|---------------------------------------------------|
//! | vent   | any       | reading ok AND temperature > threshold            |
//! | lamp   | Auto      | latch active; motion AND light > threshold extends it |
//! | lamp   | ForcedOn  | on, latch untouched                               |
//! | lamp   | ForcedOff | off, latch untouched                              |
//!
//! A failed sensor reading is absorbed here: ventilation is forced off for
//! that cycle and the display keeps the last good temperature (zero before
//! the first success). The controller itself never fails.

use log::debug;

use crate::config::NodeConfig;
use crate::error::DecodeError;
use crate::sensors::SensorReading;

use super::display::{DisplayLine, inputs_line, status_line};
use super::latch::LightLatch;
use super::mode::Mode;

/// Everything the controller needs for one cycle.
#[derive(Debug, Clone, Copy)]
pub struct ControlInputs {
    pub motion: bool,
    pub light_level: u16,
    pub sensor: Result<SensorReading, DecodeError>,
    /// Monotonic milliseconds.
    pub now_ms: u64,
    /// Mode chosen on the manual selectors this cycle (persistent override).
    pub manual_mode_override: Option<Mode>,
    /// Mode requested by a remote command this cycle.
    pub remote_mode_override: Option<Mode>,
}

/// Actuator and display outputs for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actuators {
    pub vent_on: bool,
    pub lamp_on: bool,
    pub display_line1: DisplayLine,
    pub display_line2: DisplayLine,
}

/// Owns the operating mode and the lamp latch.
pub struct AutomationController {
    mode: Mode,
    latch: LightLatch,
    /// Last successfully decoded temperature; display fallback only.
    last_temperature_tenths: u16,
    vent_threshold_tenths: u16,
    lamp_light_threshold: u16,
    lamp_hold_ms: u64,
}

impl AutomationController {
    pub fn new(config: &NodeConfig) -> Self {
        Self {
            mode: config.initial_mode,
            latch: LightLatch::new(),
            last_temperature_tenths: 0,
            vent_threshold_tenths: config.vent_threshold_tenths,
            lamp_light_threshold: config.lamp_light_threshold,
            lamp_hold_ms: u64::from(config.lamp_hold_ms),
        }
    }

    /// Run one control cycle.
    pub fn tick(&mut self, inputs: &ControlInputs) -> Actuators {
        self.mode = Self::resolve_mode(self.mode, inputs);

        let vent_on = match inputs.sensor {
            Ok(reading) => {
                self.last_temperature_tenths = reading.temperature_tenths;
                reading.temperature_tenths > self.vent_threshold_tenths
            }
            Err(_) => false,
        };

        let lamp_on = match self.mode {
            Mode::Auto => {
                if inputs.motion && inputs.light_level > self.lamp_light_threshold {
                    self.latch.extend_to(inputs.now_ms + self.lamp_hold_ms);
                    debug!("lamp latched until {} ms", self.latch.expires_at_ms());
                }
                self.latch.is_active(inputs.now_ms)
            }
            Mode::ForcedOn => true,
            Mode::ForcedOff => false,
        };

        Actuators {
            vent_on,
            lamp_on,
            display_line1: status_line(self.mode, self.last_temperature_tenths),
            display_line2: inputs_line(inputs.light_level, inputs.motion),
        }
    }

    /// Manual selectors win over remote commands; without either the
    /// current mode is kept.
    fn resolve_mode(current: Mode, inputs: &ControlInputs) -> Mode {
        inputs
            .manual_mode_override
            .or(inputs.remote_mode_override)
            .unwrap_or(current)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn latch(&self) -> LightLatch {
        self.latch
    }

    /// Temperature currently shown on the display (tenths °C).
    pub fn displayed_temperature_tenths(&self) -> u16 {
        self.last_temperature_tenths
    }
}
