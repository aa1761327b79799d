//! Sensor subsystem — the climate sensor protocol decoder and its data types.
//!
//! Light level and motion are plain ADC / GPIO samples read straight through
//! the [`SensorPort`](crate::app::ports::SensorPort); only the single-wire
//! temperature/humidity sensor needs a protocol decoder.

pub mod dht;
#[cfg(not(target_os = "espidf"))]
pub mod sim;

use crate::error::DecodeError;

/// Number of data bits in one sensor transmission.
pub const FRAME_BITS: usize = 40;

/// Number of bytes in one sensor transmission (4 payload + 1 checksum).
pub const FRAME_BYTES: usize = FRAME_BITS / 8;

/// One successfully decoded reading, in tenths fixed-point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    /// Relative humidity × 10 (e.g. 553 = 55.3 %).
    pub humidity_tenths: u16,
    /// Temperature × 10 (e.g. 236 = 23.6 °C).
    pub temperature_tenths: u16,
}

impl SensorReading {
    /// Validate the checksum of a raw 5-byte frame and convert it.
    ///
    /// Frame layout: humidity integer, humidity fraction, temperature
    /// integer, temperature fraction, checksum.
    pub fn from_frame(frame: [u8; FRAME_BYTES]) -> Result<Self, DecodeError> {
        let expected = frame[..4]
            .iter()
            .fold(0u8, |sum, b| sum.wrapping_add(*b));
        if expected != frame[4] {
            return Err(DecodeError::ChecksumMismatch {
                expected,
                actual: frame[4],
            });
        }

        Ok(Self {
            humidity_tenths: frame[0] as u16 * 10 + frame[1] as u16,
            temperature_tenths: frame[2] as u16 * 10 + frame[3] as u16,
        })
    }
}

/// Pack 40 measured high-phase durations into 5 bytes, MSB first.
///
/// A duration strictly greater than `one_threshold_us` is a 1 bit.
pub fn pack_bits(durations_us: &[u32; FRAME_BITS], one_threshold_us: u32) -> [u8; FRAME_BYTES] {
    let mut frame = [0u8; FRAME_BYTES];
    for (i, &dur) in durations_us.iter().enumerate() {
        let byte = &mut frame[i / 8];
        *byte <<= 1;
        if dur > one_threshold_us {
            *byte |= 1;
        }
    }
    frame
}

/// Append the additive checksum to a 4-byte payload.
pub fn frame_with_checksum(payload: [u8; 4]) -> [u8; FRAME_BYTES] {
    let sum = payload.iter().fold(0u8, |s, b| s.wrapping_add(*b));
    [payload[0], payload[1], payload[2], payload[3], sum]
}
