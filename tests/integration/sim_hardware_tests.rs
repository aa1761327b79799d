//! End-to-end cycles through the real `HardwareAdapter` and pulse decoder,
//! with the climate sensor replaced by a simulated waveform.

use crate::mock_hw::{LogSink, MockDisplay};

use roomnode::adapters::hardware::HardwareAdapter;
use roomnode::app::events::AppEvent;
use roomnode::app::service::NodeService;
use roomnode::config::NodeConfig;
use roomnode::error::{DecodeError, HandshakePhase};
use roomnode::remote::NullTransport;
use roomnode::sensors::dht::{PulseDecoder, PulseTiming};
use roomnode::sensors::frame_with_checksum;
use roomnode::sensors::sim::{SimClock, SimDhtLine};

fn run_one_cycle(line: SimDhtLine, clock: &SimClock) -> (roomnode::control::Actuators, LogSink, MockDisplay) {
    let config = NodeConfig::default();
    let decoder = PulseDecoder::new(line, clock.clone(), clock.clone(), PulseTiming::from_config(&config));
    let mut hw = HardwareAdapter::new(decoder);
    let mut node = NodeService::new(&config);
    let mut display = MockDisplay::default();
    let mut sink = LogSink::new();

    let out = node.run_cycle(&mut hw, &mut NullTransport, &mut display, &mut sink, 0);
    (out, sink, display)
}

#[test]
fn simulated_sensor_drives_vent_and_display() {
    let clock = SimClock::new();
    let line = SimDhtLine::with_frame(&clock, frame_with_checksum([41, 0, 23, 6]));
    let (out, sink, display) = run_one_cycle(line, &clock);

    assert!(out.vent_on, "23.6 °C is above the 15.0 °C threshold");
    assert_eq!(display.last().map(|(l1, _)| l1), Some("Mode:1 T:23.6"));
    assert!(!sink.events.iter().any(|e| matches!(e, AppEvent::SensorFault(_))));
}

#[test]
fn absent_sensor_is_absorbed_by_the_cycle() {
    let clock = SimClock::new();
    let (out, sink, display) = run_one_cycle(SimDhtLine::silent(&clock), &clock);

    assert!(!out.vent_on);
    assert_eq!(display.last().map(|(l1, _)| l1), Some("Mode:1 T:0.0"));
    assert!(sink.events.contains(&AppEvent::SensorFault(DecodeError::HandshakeTimeout(
        HandshakePhase::AwaitResponse
    ))));
}
