//! DHT11-class single-wire temperature/humidity sensor decoder.
//!
//! ## Protocol
//!
//! | Phase            | Who    | Line | Duration          |
//! |------------------|--------|------|-------------------|
//! | Start signal     | host   | low  | ≥ 18 ms           |
//! | Release          | pullup | high | 20–40 µs          |
//! | Response         | sensor | low  | ~80 µs            |
//! | Response         | sensor | high | ~80 µs            |
//! | Bit (×40)        | sensor | low  | ~50 µs            |
//! |                  | sensor | high | 26–28 µs (0) / ~70 µs (1) |
//! | End              | sensor | low  | ~50 µs, then idle |
//!
//! There is no hardware peripheral for this protocol; bits are recovered by
//! timing the high phase of each pulse against a monotonic microsecond
//! [`Clock`]. Every wait is a bounded poll loop, so a missing or stuck
//! sensor costs at most a few tens of milliseconds and yields a
//! [`DecodeError`] instead of hanging the control cycle.
//!
//! ## Pacing
//!
//! The sensor needs roughly one second between transmissions. The decoder
//! enforces no rate limit; [`NodeService`](crate::app::service::NodeService)
//! paces calls.

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::app::ports::{Clock, DataLine};
use crate::config::NodeConfig;
use crate::error::{DecodeError, HandshakePhase};

use super::{FRAME_BITS, SensorReading, pack_bits};

/// Timing parameters for one decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    pub start_signal_ms: u32,
    pub bit_one_threshold_us: u32,
    pub handshake_max_polls: u32,
    pub bit_max_polls: u32,
}

impl PulseTiming {
    pub fn from_config(config: &NodeConfig) -> Self {
        Self {
            start_signal_ms: config.start_signal_ms,
            bit_one_threshold_us: config.bit_one_threshold_us,
            handshake_max_polls: config.handshake_max_polls,
            bit_max_polls: config.bit_max_polls,
        }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::from_config(&NodeConfig::default())
    }
}

/// Blocking decoder for one sensor on a shared data line.
pub struct PulseDecoder<L, C, D> {
    line: L,
    clock: C,
    delay: D,
    timing: PulseTiming,
}

impl<L: DataLine, C: Clock, D: DelayNs> PulseDecoder<L, C, D> {
    pub fn new(line: L, clock: C, delay: D, timing: PulseTiming) -> Self {
        Self {
            line,
            clock,
            delay,
            timing,
        }
    }

    /// Run one full start → handshake → 40-bit → checksum exchange.
    pub fn decode(&mut self) -> Result<SensorReading, DecodeError> {
        self.send_start_signal();
        self.await_handshake()?;
        let durations = self.sample_bits()?;
        let frame = pack_bits(&durations, self.timing.bit_one_threshold_us);
        debug!("dht: frame={:02x?}", frame);
        SensorReading::from_frame(frame)
    }

    /// Timing parameters in use.
    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    fn send_start_signal(&mut self) {
        self.line.drive_low();
        self.delay.delay_ms(self.timing.start_signal_ms);
        self.line.release();
    }

    fn await_handshake(&mut self) -> Result<(), DecodeError> {
        let polls = self.timing.handshake_max_polls;
        let phases = [
            (HandshakePhase::AwaitResponse, true),
            (HandshakePhase::ResponseLow, false),
            (HandshakePhase::ResponseHigh, true),
        ];
        for (phase, level) in phases {
            if !self.wait_while(level, polls) {
                return Err(DecodeError::HandshakeTimeout(phase));
            }
        }
        Ok(())
    }

    /// Measure the high phase of every data bit.
    fn sample_bits(&mut self) -> Result<[u32; FRAME_BITS], DecodeError> {
        let polls = self.timing.bit_max_polls;
        let mut durations = [0u32; FRAME_BITS];

        for (bit, slot) in durations.iter_mut().enumerate() {
            let timeout = DecodeError::BitTimeout { bit: bit as u8 };

            if !self.wait_while(false, polls) {
                return Err(timeout);
            }
            let start = self.clock.now_us();
            if !self.wait_while(true, polls) {
                return Err(timeout);
            }
            let elapsed = self.clock.now_us().saturating_sub(start);
            *slot = elapsed.min(u64::from(u32::MAX)) as u32;
        }

        Ok(durations)
    }

    /// Poll until the line leaves `level`. Returns `false` if it is still
    /// at `level` after `max_polls` samples.
    fn wait_while(&mut self, level: bool, max_polls: u32) -> bool {
        for _ in 0..max_polls {
            if self.line.is_high() != level {
                return true;
            }
        }
        false
    }
}
