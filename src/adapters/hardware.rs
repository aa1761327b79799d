//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the climate [`PulseDecoder`] and drives the relay outputs, exposing
//! them through [`SensorPort`] and [`ActuatorPort`].  On non-espidf targets
//! the underlying `hw_init` helpers are simulation stubs.

use embedded_hal::delay::DelayNs;

use crate::app::ports::{ActuatorPort, Clock, DataLine, SensorPort};
use crate::drivers::hw_init;
use crate::error::DecodeError;
use crate::pins;
use crate::sensors::SensorReading;
use crate::sensors::dht::PulseDecoder;

/// Concrete adapter that combines all room-node hardware behind port traits.
pub struct HardwareAdapter<L, C, D> {
    climate: PulseDecoder<L, C, D>,
}

impl<L: DataLine, C: Clock, D: DelayNs> HardwareAdapter<L, C, D> {
    pub fn new(climate: PulseDecoder<L, C, D>) -> Self {
        Self { climate }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<L: DataLine, C: Clock, D: DelayNs> SensorPort for HardwareAdapter<L, C, D> {
    fn read_selectors(&mut self) -> [bool; 3] {
        // Active-low buttons.
        pins::MODE_BUTTON_GPIOS.map(|pin| !hw_init::gpio_read(pin))
    }

    fn read_light_level(&mut self) -> u16 {
        hw_init::adc1_read(pins::LDR_ADC1_CHANNEL)
    }

    fn read_motion(&mut self) -> bool {
        hw_init::gpio_read(pins::PIR_GPIO)
    }

    fn read_climate(&mut self) -> Result<SensorReading, DecodeError> {
        self.climate.decode()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<L, C, D> ActuatorPort for HardwareAdapter<L, C, D> {
    fn set_vent(&mut self, on: bool) {
        hw_init::gpio_write(pins::VENT_GPIO, on);
    }

    fn set_lamp(&mut self, on: bool) {
        hw_init::gpio_write(pins::LAMP_GPIO, on);
    }

    fn all_off(&mut self) {
        hw_init::gpio_write(pins::VENT_GPIO, false);
        hw_init::gpio_write(pins::LAMP_GPIO, false);
    }
}
