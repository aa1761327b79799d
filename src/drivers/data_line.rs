//! Open-drain GPIO backing the climate sensor's single-wire bus.

use crate::app::ports::DataLine;
use crate::drivers::hw_init;

/// GPIO configured as open-drain input/output with pull-up
/// (see `hw_init::init_dht_line`).
pub struct GpioDataLine {
    pin: i32,
}

impl GpioDataLine {
    pub fn new(pin: i32) -> Self {
        Self { pin }
    }
}

impl DataLine for GpioDataLine {
    fn drive_low(&mut self) {
        hw_init::gpio_write(self.pin, false);
    }

    fn release(&mut self) {
        hw_init::gpio_write(self.pin, true);
    }

    fn is_high(&mut self) -> bool {
        hw_init::gpio_read(self.pin)
    }
}
