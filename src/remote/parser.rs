//! Line-oriented remote command parser.
//!
//! Wire format (ASCII, case-sensitive, newline-terminated):
//!
//! ```text
//! S E T M O D E : <digit> \n
//! ```
//!
//! Bytes accumulate in a fixed-capacity buffer. A `\n` terminates the line,
//! which is interpreted and the buffer cleared. If the buffer fills before a
//! terminator arrives it is dropped and accumulation restarts, so a noisy or
//! half-duplex link resynchronises on the next newline without ever
//! overrunning memory. Unrecognised lines are discarded without error.

use heapless::Vec;
use log::debug;

use crate::app::commands::Command;
use crate::control::Mode;

/// Maximum line length (excluding the terminator) before the buffer resets.
pub const COMMAND_BUFFER_CAPACITY: usize = 63;

/// Literal command prefix.
const SETMODE_PREFIX: &[u8] = b"SETMODE:";

/// Streaming command line parser.
#[derive(Debug, Default)]
pub struct CommandLineParser {
    buffer: Vec<u8, COMMAND_BUFFER_CAPACITY>,
}

impl CommandLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one received byte.
    ///
    /// Returns a command when this byte completes a recognised line.
    pub fn feed(&mut self, byte: u8) -> Option<Command> {
        if byte == b'\n' {
            let command = interpret(&self.buffer);
            if command.is_none() {
                debug!("remote: discarded line ({} bytes)", self.buffer.len());
            }
            self.buffer.clear();
            return command;
        }

        // Capacity is reached on the push that fills the last slot; the
        // line cannot be valid any more, so start over.
        if self.buffer.push(byte).is_err() || self.buffer.is_full() {
            debug!("remote: line overflow, buffer reset");
            self.buffer.clear();
        }
        None
    }

    /// Bytes currently waiting for a terminator.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop any partial line (e.g. after the link is re-opened).
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

/// Interpret one complete line (terminator already stripped).
fn interpret(line: &[u8]) -> Option<Command> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    match line.strip_prefix(SETMODE_PREFIX)? {
        [digit] => Mode::from_digit(*digit).map(Command::SetMode),
        _ => None,
    }
}
