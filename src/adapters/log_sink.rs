//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | mode={} | T={} RH={} | LDR={} PIR={} | vent={} lamp={} | \
                     latch_until={}ms | sensor_failures={}",
                    t.mode,
                    Tenths(t.temperature_tenths),
                    Tenths(t.humidity_tenths),
                    t.light_level,
                    u8::from(t.motion),
                    if t.vent_on { "ON" } else { "OFF" },
                    if t.lamp_on { "ON" } else { "OFF" },
                    t.lamp_latch_expires_at_ms,
                    t.sensor_failures,
                );
            }
            AppEvent::ModeChanged { from, to, source } => {
                info!("MODE | {} -> {} ({:?})", from, to, source);
            }
            AppEvent::SensorFault(e) => {
                warn!("SENSOR | decode failed: {}", e);
            }
            AppEvent::SensorRecovered => {
                info!("SENSOR | recovered");
            }
            AppEvent::LampLatched { expires_at_ms } => {
                debug!("LAMP | latched until {}ms", expires_at_ms);
            }
            AppEvent::Started(mode) => {
                info!("START | initial_mode={}", mode);
            }
        }
    }
}

/// Tenths fixed-point formatter; `--` when no value is known yet.
struct Tenths(Option<u16>);

impl core::fmt::Display for Tenths {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}.{}", v / 10, v % 10),
            None => f.write_str("--"),
        }
    }
}
