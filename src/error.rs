//! Error types for the RoomNode firmware.
//!
//! The climate sensor decoder is the only domain component that can fail.
//! Its failures are absorbed by the automation controller (ventilation off,
//! stale temperature on the display), so they never halt the control cycle.
//! All variants are `Copy` so they can be carried inside per-cycle inputs
//! and events without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Climate sensor decode errors
// ---------------------------------------------------------------------------

/// The three handshake phases that precede the 40-bit payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakePhase {
    /// Line released; waiting for the sensor to pull it low.
    AwaitResponse,
    /// Sensor holds the line low (~80 µs).
    ResponseLow,
    /// Sensor holds the line high (~80 µs) before the first data bit.
    ResponseHigh,
}

impl fmt::Display for HandshakePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitResponse => write!(f, "await response"),
            Self::ResponseLow => write!(f, "response low"),
            Self::ResponseHigh => write!(f, "response high"),
        }
    }
}

/// A decode attempt produced no reading this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The sensor did not complete a handshake phase within the poll limit.
    HandshakeTimeout(HandshakePhase),
    /// A data bit edge did not arrive within the poll limit.
    BitTimeout {
        /// Zero-based index of the bit being read (0..40).
        bit: u8,
    },
    /// The additive checksum byte did not match the payload.
    ChecksumMismatch {
        /// `(b0 + b1 + b2 + b3) mod 256`.
        expected: u8,
        /// Checksum byte actually received.
        actual: u8,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HandshakeTimeout(phase) => write!(f, "handshake timeout ({phase})"),
            Self::BitTimeout { bit } => write!(f, "bit {bit} timeout"),
            Self::ChecksumMismatch { expected, actual } => write!(
                f,
                "checksum mismatch (expected 0x{expected:02x}, got 0x{actual:02x})"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`NodeConfig`](crate::config::NodeConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Override document could not be parsed.
    Malformed,
    /// A config field failed range validation.
    /// The `&'static str` names the field.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "config malformed"),
            Self::ValidationFailed(field) => write!(f, "validation failed: {field}"),
        }
    }
}

impl std::error::Error for ConfigError {}
