//! UART transport for the remote command link.

use crate::drivers::hw_init;
use crate::remote::Transport;

/// Non-blocking reader over an installed ESP-IDF UART driver.
pub struct UartTransport {
    port: i32,
}

impl UartTransport {
    /// `port` must already be configured by `hw_init::init_peripherals`.
    pub fn new(port: i32) -> Self {
        Self { port }
    }
}

impl Transport for UartTransport {
    /// Raw ESP-IDF return code.
    type Error = i32;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, i32> {
        hw_init::uart_read(self.port, buf)
    }

    fn available(&self) -> bool {
        hw_init::uart_buffered_len(self.port) > 0
    }
}
