//! Status line formatting for the 16×2 character display.
//!
//! ```text
//! ┌────────────────┐
//! │Mode:1 T:23.6   │
//! │LDR:412 PIR:1   │
//! └────────────────┘
//! ```

use core::fmt::{self, Write};

use heapless::String;

use super::mode::Mode;

/// Display width in columns.
pub const DISPLAY_COLUMNS: usize = 16;

/// One rendered display line, bounded to the display width.
pub type DisplayLine = String<DISPLAY_COLUMNS>;

/// Writer that silently drops characters past the line width.
struct Truncating<'a>(&'a mut DisplayLine);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// `Mode:<code> T:<whole>.<tenth>`
pub fn status_line(mode: Mode, temperature_tenths: u16) -> DisplayLine {
    let mut line = DisplayLine::new();
    let _ = write!(
        Truncating(&mut line),
        "Mode:{} T:{}.{}",
        mode.code(),
        temperature_tenths / 10,
        temperature_tenths % 10
    );
    line
}

/// `LDR:<raw> PIR:<0|1>`
pub fn inputs_line(light_level: u16, motion: bool) -> DisplayLine {
    let mut line = DisplayLine::new();
    let _ = write!(
        Truncating(&mut line),
        "LDR:{} PIR:{}",
        light_level,
        u8::from(motion)
    );
    line
}
