//! Integration tests for the NodeService → controller → actuators pipeline.
//!
//! These run on the host and drive whole control cycles through mock
//! adapters: selectors and serial in, relays and display out.

use crate::mock_hw::{ActuatorCall, LogSink, MockDisplay, MockHardware, ScriptedSerial, reading};

use roomnode::app::events::{AppEvent, ModeSource};
use roomnode::app::service::{MAX_RX_BYTES_PER_CYCLE, NodeService};
use roomnode::config::NodeConfig;
use roomnode::control::Mode;
use roomnode::error::{DecodeError, HandshakePhase};

struct Rig {
    node: NodeService,
    hw: MockHardware,
    serial: ScriptedSerial,
    display: MockDisplay,
    sink: LogSink,
}

impl Rig {
    fn new(config: &NodeConfig) -> Self {
        let mut rig = Self {
            node: NodeService::new(config),
            hw: MockHardware::new(),
            serial: ScriptedSerial::new(),
            display: MockDisplay::default(),
            sink: LogSink::new(),
        };
        rig.node.start(&mut rig.sink);
        rig
    }

    fn cycle(&mut self, now_ms: u64) -> roomnode::control::Actuators {
        self.node.run_cycle(
            &mut self.hw,
            &mut self.serial,
            &mut self.display,
            &mut self.sink,
            now_ms,
        )
    }
}

fn rig() -> Rig {
    Rig::new(&NodeConfig::default())
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn start_emits_initial_mode() {
    let r = rig();
    assert_eq!(r.sink.events, [AppEvent::Started(Mode::Auto)]);
}

#[test]
fn configured_initial_mode_is_used() {
    let r = Rig::new(&NodeConfig {
        initial_mode: Mode::ForcedOn,
        ..NodeConfig::default()
    });
    assert_eq!(r.node.mode(), Mode::ForcedOn);
}

// ── Remote commands ───────────────────────────────────────────

#[test]
fn setmode_over_serial_switches_mode() {
    let mut r = rig();
    r.serial.send(b"SETMODE:2\n");
    let out = r.cycle(0);

    assert_eq!(r.node.mode(), Mode::ForcedOn);
    assert!(out.lamp_on);
    assert!(r.hw.lamp_on());
    assert!(r.sink.events.contains(&AppEvent::ModeChanged {
        from: Mode::Auto,
        to: Mode::ForcedOn,
        source: ModeSource::Remote,
    }));
}

#[test]
fn partial_command_completes_on_a_later_cycle() {
    let mut r = rig();
    r.serial.send(b"SETMO");
    r.cycle(0);
    assert_eq!(r.node.mode(), Mode::Auto);

    r.serial.send(b"DE:3\n");
    r.cycle(300);
    assert_eq!(r.node.mode(), Mode::ForcedOff);
}

#[test]
fn last_command_in_a_cycle_wins() {
    let mut r = rig();
    r.serial.send(b"SETMODE:2\nnoise\nSETMODE:3\n");
    r.cycle(0);
    assert_eq!(r.node.mode(), Mode::ForcedOff);
    assert_eq!(
        r.sink.count(|e| matches!(e, AppEvent::ModeChanged { .. })),
        1,
        "only the resolved mode change is reported"
    );
}

#[test]
fn serial_drain_is_capped_per_cycle() {
    let mut r = rig();
    r.serial.send(&[b'x'; 1000]);
    r.cycle(0);
    assert_eq!(r.serial.rx.len(), 1000 - MAX_RX_BYTES_PER_CYCLE);
}

#[test]
fn serial_read_error_does_not_stop_the_cycle() {
    let mut r = rig();
    r.serial.send(b"SETMODE:2\n");
    r.serial.fail_reads = true;
    r.cycle(0);
    assert_eq!(r.node.mode(), Mode::Auto);
    assert!(!r.hw.calls.is_empty(), "outputs still applied");
}

// ── Manual selectors ──────────────────────────────────────────

#[test]
fn selector_beats_remote_in_the_same_cycle() {
    let mut r = rig();
    r.hw.selectors = [false, true, false];
    r.serial.send(b"SETMODE:3\n");
    r.cycle(0);
    assert_eq!(r.node.mode(), Mode::ForcedOn);
    assert!(r.sink.events.contains(&AppEvent::ModeChanged {
        from: Mode::Auto,
        to: Mode::ForcedOn,
        source: ModeSource::Selector,
    }));
}

#[test]
fn simultaneous_selectors_one_and_two_resolve_to_auto() {
    let mut r = Rig::new(&NodeConfig {
        initial_mode: Mode::ForcedOff,
        ..NodeConfig::default()
    });
    r.hw.selectors = [true, true, false];
    r.cycle(0);
    assert_eq!(r.node.mode(), Mode::Auto);
}

#[test]
fn selector_choice_persists_after_release() {
    let mut r = rig();
    r.hw.selectors = [false, false, true];
    r.cycle(0);
    r.hw.selectors = [false; 3];
    r.cycle(300);
    assert_eq!(r.node.mode(), Mode::ForcedOff);
    assert!(!r.hw.lamp_on());
}

// ── Ventilation and sensor faults ─────────────────────────────

#[test]
fn warm_room_turns_vent_on() {
    let mut r = rig();
    r.hw.steady_climate = reading(160);
    assert!(r.cycle(0).vent_on);
    assert!(r.hw.vent_on());
}

#[test]
fn handshake_timeout_turns_vent_off_in_every_mode() {
    let fault = Err(DecodeError::HandshakeTimeout(HandshakePhase::AwaitResponse));
    for (selectors, mode) in [
        ([true, false, false], Mode::Auto),
        ([false, true, false], Mode::ForcedOn),
        ([false, false, true], Mode::ForcedOff),
    ] {
        let mut r = rig();
        r.hw.selectors = selectors;
        r.hw.steady_climate = fault;
        let out = r.cycle(0);
        assert_eq!(r.node.mode(), mode);
        assert!(!out.vent_on, "vent must be off after a timeout in {mode}");
        assert!(r.sink.events.contains(&AppEvent::SensorFault(
            DecodeError::HandshakeTimeout(HandshakePhase::AwaitResponse)
        )));
    }
}

#[test]
fn failed_reading_keeps_last_temperature_on_display() {
    let mut r = rig();
    r.hw.climate_script.push_back(reading(236));
    r.hw.steady_climate = Err(DecodeError::BitTimeout { bit: 7 });

    r.cycle(0);
    assert_eq!(r.display.last().map(|(l1, _)| l1), Some("Mode:1 T:23.6"));

    let out = r.cycle(1000);
    assert!(!out.vent_on);
    assert_eq!(r.display.last().map(|(l1, _)| l1), Some("Mode:1 T:23.6"));
    assert_eq!(r.node.sensor_failures(), 1);
}

#[test]
fn sensor_recovery_is_reported() {
    let mut r = rig();
    r.hw.climate_script.push_back(Err(DecodeError::ChecksumMismatch { expected: 1, actual: 2 }));
    r.hw.steady_climate = reading(180);

    r.cycle(0);
    r.cycle(1000);
    assert_eq!(r.sink.count(|e| *e == AppEvent::SensorRecovered), 1);
    assert_eq!(r.node.sensor_failures(), 0);
}

// ── Decode pacing ─────────────────────────────────────────────

#[test]
fn decoder_is_paced_to_the_minimum_interval() {
    let mut r = rig();
    for now in [0, 300, 600, 900] {
        r.cycle(now);
    }
    assert_eq!(r.hw.climate_reads, 1);

    r.cycle(1000);
    assert_eq!(r.hw.climate_reads, 2);
}

#[test]
fn cycles_between_decodes_reuse_the_last_attempt() {
    let mut r = rig();
    r.hw.climate_script.push_back(Err(DecodeError::BitTimeout { bit: 0 }));
    r.hw.steady_climate = reading(300);

    assert!(!r.cycle(0).vent_on);
    assert!(!r.cycle(300).vent_on, "failed attempt still applies");
    assert_eq!(
        r.sink.count(|e| matches!(e, AppEvent::SensorFault(_))),
        1,
        "fault reported once per attempt"
    );

    assert!(r.cycle(1000).vent_on);
}

// ── Lamp latch ────────────────────────────────────────────────

#[test]
fn motion_in_the_dark_latches_lamp_for_four_seconds() {
    let mut r = rig();
    let t = 10_000;
    r.hw.motion = true;
    r.hw.light_level = 400;
    assert!(r.cycle(t).lamp_on);
    assert_eq!(r.node.latch().expires_at_ms(), t + 4000);
    assert!(r.sink.events.contains(&AppEvent::LampLatched { expires_at_ms: t + 4000 }));

    r.hw.motion = false;
    assert!(r.cycle(t + 3999).lamp_on);
    assert!(!r.cycle(t + 4000).lamp_on);
    assert!(!r.hw.lamp_on());
}

#[test]
fn forced_off_leaves_latch_for_auto() {
    let mut r = rig();
    r.hw.motion = true;
    r.hw.light_level = 900;
    r.cycle(0);

    r.hw.motion = false;
    r.serial.send(b"SETMODE:3\n");
    assert!(!r.cycle(1000).lamp_on);

    r.serial.send(b"SETMODE:1\n");
    assert!(r.cycle(2000).lamp_on, "latch from t=0 still active");
    assert!(!r.cycle(4000).lamp_on);
}

// ── Display and telemetry ─────────────────────────────────────

#[test]
fn display_receives_both_lines_each_cycle() {
    let mut r = rig();
    r.hw.steady_climate = reading(236);
    r.hw.light_level = 412;
    r.hw.motion = true;
    r.cycle(0);
    assert_eq!(r.display.last(), Some(("Mode:1 T:23.6", "LDR:412 PIR:1")));

    r.cycle(300);
    assert_eq!(r.display.frames.len(), 2);
}

#[test]
fn actuators_written_every_cycle() {
    let mut r = rig();
    r.cycle(0);
    assert_eq!(
        r.hw.calls,
        [ActuatorCall::SetVent(true), ActuatorCall::SetLamp(false)]
    );
}

#[test]
fn telemetry_is_emitted_on_interval() {
    let mut r = Rig::new(&NodeConfig {
        telemetry_interval_cycles: 3,
        ..NodeConfig::default()
    });
    r.hw.steady_climate = reading(215);
    r.hw.light_level = 120;
    for i in 0..7 {
        r.cycle(i * 300);
    }

    let telemetry: Vec<_> = r
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::Telemetry(t) => Some(*t),
            _ => None,
        })
        .collect();
    assert_eq!(telemetry.len(), 2);
    let t = telemetry[0];
    assert_eq!(t.mode, Mode::Auto);
    assert_eq!(t.temperature_tenths, Some(215));
    assert_eq!(t.humidity_tenths, Some(450));
    assert_eq!(t.light_level, 120);
    assert!(t.vent_on);
    assert!(!t.lamp_on);
}

#[test]
fn telemetry_before_first_reading_has_no_climate() {
    let r = rig();
    let t = r.node.build_telemetry();
    assert_eq!(t.temperature_tenths, None);
    assert_eq!(t.sensor_failures, 0);
}
