//! Mock hardware adapters for integration tests.
//!
//! Records every actuator and display call so tests can assert on the full
//! command history without touching real GPIO registers, and scripts the
//! sensor and serial inputs cycle by cycle.

use std::collections::VecDeque;

use roomnode::app::events::AppEvent;
use roomnode::app::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use roomnode::error::DecodeError;
use roomnode::remote::Transport;
use roomnode::sensors::SensorReading;

pub type Climate = Result<SensorReading, DecodeError>;

pub fn reading(temperature_tenths: u16) -> Climate {
    Ok(SensorReading {
        humidity_tenths: 450,
        temperature_tenths,
    })
}

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    SetVent(bool),
    SetLamp(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
    pub selectors: [bool; 3],
    pub light_level: u16,
    pub motion: bool,
    /// Results handed out by successive decodes; once drained,
    /// `steady_climate` is returned.
    pub climate_script: VecDeque<Climate>,
    pub steady_climate: Climate,
    pub climate_reads: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            selectors: [false; 3],
            light_level: 0,
            motion: false,
            climate_script: VecDeque::new(),
            steady_climate: reading(200),
            climate_reads: 0,
        }
    }

    pub fn vent_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetVent(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                ActuatorCall::SetLamp(_) => None,
            })
            .unwrap_or(false)
    }

    pub fn lamp_on(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetLamp(on) => Some(*on),
                ActuatorCall::AllOff => Some(false),
                ActuatorCall::SetVent(_) => None,
            })
            .unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn read_selectors(&mut self) -> [bool; 3] {
        self.selectors
    }

    fn read_light_level(&mut self) -> u16 {
        self.light_level
    }

    fn read_motion(&mut self) -> bool {
        self.motion
    }

    fn read_climate(&mut self) -> Climate {
        self.climate_reads += 1;
        self.climate_script.pop_front().unwrap_or(self.steady_climate)
    }
}

impl ActuatorPort for MockHardware {
    fn set_vent(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetVent(on));
    }

    fn set_lamp(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetLamp(on));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── ScriptedSerial ────────────────────────────────────────────

/// Serial link that hands out queued bytes in chunks of at most `max_chunk`.
pub struct ScriptedSerial {
    pub rx: VecDeque<u8>,
    pub max_chunk: usize,
    pub fail_reads: bool,
}

#[allow(dead_code)]
impl ScriptedSerial {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            max_chunk: 7,
            fail_reads: false,
        }
    }

    pub fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes);
    }
}

impl Default for ScriptedSerial {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ScriptedSerial {
    type Error = &'static str;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err("framing error");
        }
        let n = buf.len().min(self.max_chunk).min(self.rx.len());
        for slot in &mut buf[..n] {
            *slot = self.rx.pop_front().unwrap_or_default();
        }
        Ok(n)
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }
}

// ── MockDisplay ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockDisplay {
    pub frames: Vec<(String, String)>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn last(&self) -> Option<(&str, &str)> {
        self.frames.last().map(|(a, b)| (a.as_str(), b.as_str()))
    }
}

impl DisplayPort for MockDisplay {
    fn show(&mut self, line1: &str, line2: &str) {
        self.frames.push((line1.to_owned(), line2.to_owned()));
    }
}

// ── LogSink ──────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
