//! Host-side simulation of the climate sensor waveform.
//!
//! ## Dual-target design
//!
//! On ESP-IDF the decoder samples a real GPIO against `esp_timer`.
//! On host/test the decoder runs against [`SimDhtLine`] and [`SimClock`]:
//! the line replays a scripted sequence of `(level, duration_us)` segments
//! starting at the moment the host releases it, and every sample advances
//! the shared simulated clock by one microsecond.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::app::ports::{Clock, DataLine};

use super::{FRAME_BITS, FRAME_BYTES};

/// Cost of one line sample on the simulated clock.
const POLL_COST_US: u64 = 1;

/// Nominal sensor timings (microseconds).
const PULLUP_WAIT_US: u32 = 30;
const RESPONSE_LOW_US: u32 = 80;
const RESPONSE_HIGH_US: u32 = 80;
const BIT_LOW_US: u32 = 50;
const BIT_ZERO_HIGH_US: u32 = 27;
const BIT_ONE_HIGH_US: u32 = 70;
const END_LOW_US: u32 = 50;

/// Long enough to exhaust any realistic poll limit.
const FOREVER_US: u32 = 10_000_000;

/// Shared simulated monotonic clock. Clones observe the same time.
#[derive(Debug, Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time (µs).
    pub fn now(&self) -> u64 {
        self.0.get()
    }

    pub fn advance_us(&self, us: u64) {
        self.0.set(self.0.get() + us);
    }
}

impl Clock for SimClock {
    fn now_us(&mut self) -> u64 {
        self.now()
    }
}

impl DelayNs for SimClock {
    fn delay_ns(&mut self, ns: u32) {
        self.advance_us(u64::from(ns.div_ceil(1000)));
    }
}

/// Scripted data line that behaves like a sensor answering a start signal.
#[derive(Debug, Clone)]
pub struct SimDhtLine {
    clock: SimClock,
    segments: Vec<(bool, u32)>,
    driven_low: bool,
    released_at: Option<u64>,
}

impl SimDhtLine {
    /// Replay arbitrary segments after release. Past the last segment the
    /// pull-up holds the line high.
    pub fn from_segments(clock: &SimClock, segments: Vec<(bool, u32)>) -> Self {
        Self {
            clock: clock.clone(),
            segments,
            driven_low: false,
            released_at: None,
        }
    }

    /// No sensor attached: the line idles high forever.
    pub fn silent(clock: &SimClock) -> Self {
        Self::from_segments(clock, Vec::new())
    }

    /// A well-behaved sensor transmitting `frame`.
    pub fn with_frame(clock: &SimClock, frame: [u8; FRAME_BYTES]) -> Self {
        Self::with_durations(clock, &frame_durations(frame))
    }

    /// A sensor whose 40 high phases last exactly `durations_us`.
    pub fn with_durations(clock: &SimClock, durations_us: &[u32; FRAME_BITS]) -> Self {
        let mut segments = handshake_segments();
        for &high in durations_us {
            segments.push((false, BIT_LOW_US));
            segments.push((true, high));
        }
        segments.push((false, END_LOW_US));
        Self::from_segments(clock, segments)
    }

    /// A sensor that sends the first `bits` bits of `frame` and then holds
    /// the line low.
    pub fn truncated(clock: &SimClock, frame: [u8; FRAME_BYTES], bits: usize) -> Self {
        let mut segments = handshake_segments();
        for &high in frame_durations(frame).iter().take(bits) {
            segments.push((false, BIT_LOW_US));
            segments.push((true, high));
        }
        segments.push((false, FOREVER_US));
        Self::from_segments(clock, segments)
    }

    /// Simulated time at which the host released the line.
    pub fn released_at_us(&self) -> Option<u64> {
        self.released_at
    }

    fn level_after_release(&self, elapsed_us: u64) -> bool {
        let mut boundary = 0u64;
        for &(level, duration) in &self.segments {
            boundary += u64::from(duration);
            if elapsed_us < boundary {
                return level;
            }
        }
        true
    }
}

impl DataLine for SimDhtLine {
    fn drive_low(&mut self) {
        self.driven_low = true;
        self.released_at = None;
    }

    fn release(&mut self) {
        self.driven_low = false;
        self.released_at = Some(self.clock.now());
    }

    fn is_high(&mut self) -> bool {
        let level = match self.released_at {
            _ if self.driven_low => false,
            Some(at) => self.level_after_release(self.clock.now() - at),
            None => true,
        };
        self.clock.advance_us(POLL_COST_US);
        level
    }
}

fn handshake_segments() -> Vec<(bool, u32)> {
    vec![
        (true, PULLUP_WAIT_US),
        (false, RESPONSE_LOW_US),
        (true, RESPONSE_HIGH_US),
    ]
}

/// Nominal high-phase durations encoding `frame`, MSB first.
pub fn frame_durations(frame: [u8; FRAME_BYTES]) -> [u32; FRAME_BITS] {
    let mut durations = [0u32; FRAME_BITS];
    for (i, slot) in durations.iter_mut().enumerate() {
        let bit = (frame[i / 8] >> (7 - i % 8)) & 1;
        *slot = if bit == 1 {
            BIT_ONE_HIGH_US
        } else {
            BIT_ZERO_HIGH_US
        };
    }
    durations
}
