//! Application service — the hexagonal core.
//!
//! [`NodeService`] owns the automation controller, the command parser and
//! the climate sampling state. All I/O flows through port traits injected
//! at call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────────┐ ──▶ ActuatorPort
//!    Transport ──▶ │       NodeService         │ ──▶ DisplayPort
//!                  │  Parser · Controller      │ ──▶ EventSink
//!                  └──────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::NodeConfig;
use crate::control::{Actuators, AutomationController, ControlInputs, LightLatch, Mode, ModeSelector};
use crate::error::DecodeError;
use crate::remote::{CommandLineParser, Transport};
use crate::sensors::SensorReading;

use super::events::{AppEvent, ModeSource, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};

/// Upper bound on serial bytes consumed in one cycle, so a flooding link
/// cannot starve the control loop.
pub const MAX_RX_BYTES_PER_CYCLE: usize = 256;

const RX_CHUNK: usize = 32;

type ClimateResult = Result<SensorReading, DecodeError>;

// ───────────────────────────────────────────────────────────────
// NodeService
// ───────────────────────────────────────────────────────────────

/// Drives one control cycle at a time against the port traits.
pub struct NodeService {
    controller: AutomationController,
    parser: CommandLineParser,
    sensor_min_interval_ms: u64,
    telemetry_interval_cycles: u64,
    /// Time and outcome of the most recent decode attempt.
    last_attempt: Option<(u64, ClimateResult)>,
    last_good: Option<SensorReading>,
    sensor_failures: u32,
    vent_on: bool,
    lamp_on: bool,
    light_level: u16,
    motion: bool,
    tick_count: u64,
}

impl NodeService {
    pub fn new(config: &NodeConfig) -> Self {
        Self {
            controller: AutomationController::new(config),
            parser: CommandLineParser::new(),
            sensor_min_interval_ms: u64::from(config.sensor_min_interval_ms),
            telemetry_interval_cycles: u64::from(config.telemetry_interval_cycles.max(1)),
            last_attempt: None,
            last_good: None,
            sensor_failures: 0,
            vent_on: false,
            lamp_on: false,
            light_level: 0,
            motion: false,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.controller.mode()));
        info!("NodeService started in {}", self.controller.mode());
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full control cycle: selectors → serial → climate →
    /// controller → actuators and display.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        serial: &mut impl Transport,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
        now_ms: u64,
    ) -> Actuators {
        self.tick_count += 1;

        // 1. Manual selectors
        let manual_mode_override = ModeSelector::resolve(hw.read_selectors());

        // 2. Remote commands
        let remote_mode_override = self.drain_serial(serial);

        // 3. Climate sensor (paced)
        let sensor = self.sample_climate(hw, sink, now_ms);

        // 4. Raw digital/analog inputs
        let light_level = hw.read_light_level();
        let motion = hw.read_motion();

        // 5. Controller
        let prev_mode = self.controller.mode();
        let prev_deadline = self.controller.latch().expires_at_ms();

        let out = self.controller.tick(&ControlInputs {
            motion,
            light_level,
            sensor,
            now_ms,
            manual_mode_override,
            remote_mode_override,
        });

        let mode = self.controller.mode();
        if mode != prev_mode {
            let source = if manual_mode_override.is_some() {
                ModeSource::Selector
            } else {
                ModeSource::Remote
            };
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: mode,
                source,
            });
        }

        let deadline = self.controller.latch().expires_at_ms();
        if deadline != prev_deadline {
            sink.emit(&AppEvent::LampLatched {
                expires_at_ms: deadline,
            });
        }

        // 6. Apply outputs via ports
        hw.set_vent(out.vent_on);
        hw.set_lamp(out.lamp_on);
        display.show(&out.display_line1, &out.display_line2);

        self.vent_on = out.vent_on;
        self.lamp_on = out.lamp_on;
        self.light_level = light_level;
        self.motion = motion;

        if self.tick_count % self.telemetry_interval_cycles == 0 {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }

        out
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the most recent cycle.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            mode: self.controller.mode(),
            vent_on: self.vent_on,
            lamp_on: self.lamp_on,
            temperature_tenths: self.last_good.map(|r| r.temperature_tenths),
            humidity_tenths: self.last_good.map(|r| r.humidity_tenths),
            light_level: self.light_level,
            motion: self.motion,
            lamp_latch_expires_at_ms: self.controller.latch().expires_at_ms(),
            sensor_failures: self.sensor_failures,
        }
    }

    /// Current operating mode.
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn latch(&self) -> LightLatch {
        self.controller.latch()
    }

    /// Total control cycles executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Consecutive failed climate decodes.
    pub fn sensor_failures(&self) -> u32 {
        self.sensor_failures
    }

    // ── Internal ──────────────────────────────────────────────

    /// Feed pending serial bytes through the parser. When several commands
    /// complete in one cycle the last one wins.
    fn drain_serial(&mut self, serial: &mut impl Transport) -> Option<Mode> {
        let mut requested = None;
        let mut buf = [0u8; RX_CHUNK];
        let mut budget = MAX_RX_BYTES_PER_CYCLE;

        while budget > 0 && serial.available() {
            let want = budget.min(RX_CHUNK);
            let n = match serial.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(n) => n.min(want),
                Err(e) => {
                    warn!("serial read failed: {:?}", e);
                    break;
                }
            };
            budget -= n;

            for &byte in &buf[..n] {
                if let Some(cmd) = self.parser.feed(byte) {
                    info!("remote command: {:?}", cmd);
                    requested = cmd.requested_mode().or(requested);
                }
            }
        }
        requested
    }

    /// Decode the climate sensor if the minimum interval has elapsed since
    /// the previous attempt; otherwise reuse that attempt's outcome.
    fn sample_climate(
        &mut self,
        hw: &mut impl SensorPort,
        sink: &mut impl EventSink,
        now_ms: u64,
    ) -> ClimateResult {
        if let Some((at, result)) = self.last_attempt {
            if now_ms.saturating_sub(at) < self.sensor_min_interval_ms {
                return result;
            }
        }

        let result = hw.read_climate();
        match result {
            Ok(reading) => {
                if self.sensor_failures > 0 {
                    sink.emit(&AppEvent::SensorRecovered);
                }
                self.sensor_failures = 0;
                self.last_good = Some(reading);
            }
            Err(e) => {
                self.sensor_failures = self.sensor_failures.saturating_add(1);
                warn!("climate decode failed: {} (x{})", e, self.sensor_failures);
                sink.emit(&AppEvent::SensorFault(e));
            }
        }
        self.last_attempt = Some((now_ms, result));
        result
    }
}
