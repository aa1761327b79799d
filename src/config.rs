//! System configuration parameters
//!
//! All tunable parameters for the RoomNode system. Defaults reproduce the
//! behaviour of the shipped node; a JSON override document can replace any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::control::Mode;
use crate::error::ConfigError;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Mode the node boots into.
    pub initial_mode: Mode,

    // --- Ventilation ---
    /// Ventilation runs while temperature (tenths °C) is strictly above this.
    pub vent_threshold_tenths: u16,

    // --- Lamp ---
    /// Raw ADC light level the lamp trigger must exceed.
    pub lamp_light_threshold: u16,
    /// How long the lamp stays latched after a trigger (milliseconds).
    pub lamp_hold_ms: u32,

    // --- Climate sensor protocol ---
    /// Host start signal: how long the data line is held low (milliseconds).
    pub start_signal_ms: u32,
    /// High-phase duration above which a bit decodes as 1 (microseconds).
    pub bit_one_threshold_us: u32,
    /// Poll limit for each handshake phase.
    pub handshake_max_polls: u32,
    /// Poll limit for each edge wait inside a data bit.
    pub bit_max_polls: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Minimum time between two climate sensor decodes (milliseconds).
    pub sensor_min_interval_ms: u32,
    /// Telemetry report interval (control cycles)
    pub telemetry_interval_cycles: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Auto,

            // Ventilation
            vent_threshold_tenths: 150, // 15.0 °C

            // Lamp
            lamp_light_threshold: 350,
            lamp_hold_ms: 4000,

            // Climate sensor
            start_signal_ms: 18,
            bit_one_threshold_us: 40,
            handshake_max_polls: 10_000,
            bit_max_polls: 10_000,

            // Timing
            control_loop_interval_ms: 300,
            sensor_min_interval_ms: 1000,
            telemetry_interval_cycles: 100,
        }
    }
}

impl NodeConfig {
    /// Parse a JSON override document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Config override rejected: {}", e);
            ConfigError::Malformed
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the node misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lamp_hold_ms == 0 {
            return Err(ConfigError::ValidationFailed("lamp_hold_ms must be > 0"));
        }
        if self.start_signal_ms < 18 {
            return Err(ConfigError::ValidationFailed(
                "start_signal_ms must be >= 18",
            ));
        }
        if self.bit_one_threshold_us == 0 || self.bit_one_threshold_us >= 100 {
            return Err(ConfigError::ValidationFailed(
                "bit_one_threshold_us must be in 1..100",
            ));
        }
        if self.handshake_max_polls == 0 || self.bit_max_polls == 0 {
            return Err(ConfigError::ValidationFailed("poll limits must be > 0"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "control_loop_interval_ms must be > 0",
            ));
        }
        if self.sensor_min_interval_ms < 1000 {
            return Err(ConfigError::ValidationFailed(
                "sensor_min_interval_ms must be >= 1000",
            ));
        }
        if self.telemetry_interval_cycles == 0 {
            return Err(ConfigError::ValidationFailed(
                "telemetry_interval_cycles must be > 0",
            ));
        }
        Ok(())
    }
}
