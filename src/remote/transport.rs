//! Transport abstraction — any byte-oriented receive channel.
//!
//! Concrete implementations:
//! - UART serial ([`UartTransport`](crate::adapters::uart::UartTransport))
//! - [`NullTransport`] when no link is wired
//!
//! The node service is generic over `Transport`, so swapping the link
//! (USB CDC, a second UART) requires no change to the command logic.

/// Byte-oriented receive channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: core::fmt::Debug;

    /// Read up to `buf.len()` bytes into `buf`.
    /// Returns the number of bytes actually read.
    /// Returns 0 if no data is available (non-blocking).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Check if data is available for reading.
    fn available(&self) -> bool;
}

/// A null transport that never yields data.
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = ();

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, ()> {
        Ok(0)
    }

    fn available(&self) -> bool {
        false
    }
}
