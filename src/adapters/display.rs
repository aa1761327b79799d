//! Log-backed display adapter.
//!
//! Implements [`DisplayPort`] by mirroring the two character-display lines
//! to the console. Only changed frames are logged so the 300 ms control
//! loop does not flood the UART.

use heapless::String;
use log::info;

use crate::app::ports::DisplayPort;
use crate::control::display::DISPLAY_COLUMNS;

#[derive(Default)]
pub struct LogDisplay {
    line1: String<DISPLAY_COLUMNS>,
    line2: String<DISPLAY_COLUMNS>,
    frames: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct frames shown so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl DisplayPort for LogDisplay {
    fn show(&mut self, line1: &str, line2: &str) {
        if self.frames > 0 && self.line1.as_str() == line1 && self.line2.as_str() == line2 {
            return;
        }
        self.line1 = clip(line1);
        self.line2 = clip(line2);
        self.frames = self.frames.wrapping_add(1);
        info!("LCD | {:<16} | {:<16}", self.line1.as_str(), self.line2.as_str());
    }
}

fn clip(line: &str) -> String<DISPLAY_COLUMNS> {
    let mut out = String::new();
    for ch in line.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
