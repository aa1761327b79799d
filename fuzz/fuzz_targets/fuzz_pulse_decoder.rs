//! Fuzz target: `PulseDecoder::decode` against arbitrary waveforms.
//!
//! Each input byte pair becomes one (level, duration) segment replayed on a
//! simulated data line. The decoder must terminate with either a reading or
//! a `DecodeError`, within its poll bounds.
//!
//! cargo fuzz run fuzz_pulse_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use roomnode::sensors::dht::{PulseDecoder, PulseTiming};
use roomnode::sensors::sim::{SimClock, SimDhtLine};

fuzz_target!(|data: &[u8]| {
    let segments = data
        .chunks_exact(2)
        .map(|pair| (pair[0] & 1 == 1, u32::from(pair[1]) + 1))
        .collect();

    let clock = SimClock::new();
    let line = SimDhtLine::from_segments(&clock, segments);
    let timing = PulseTiming {
        handshake_max_polls: 500,
        bit_max_polls: 500,
        ..PulseTiming::default()
    };
    let mut decoder = PulseDecoder::new(line, clock.clone(), clock.clone(), timing);
    let _ = decoder.decode();

    // Start signal + 3 handshake waits + 80 bit waits, one poll per µs.
    let bound = 18_000 + 83 * 500 + 1;
    assert!(clock.now() <= bound, "decoder overran its poll budget");
});
