//! Operating mode and manual mode selector.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Operating mode. The discriminant is the numeric code shown on the
/// display and used by the remote protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Mode {
    /// Lamp follows motion + light with a timed latch.
    #[default]
    Auto = 1,
    /// Lamp forced on.
    ForcedOn = 2,
    /// Lamp forced off.
    ForcedOff = 3,
}

impl Mode {
    /// Numeric code (1, 2, 3).
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a remote-protocol digit to a mode.
    ///
    /// `'1'` is Auto, `'2'` is ForcedOn, every other digit falls through
    /// to ForcedOff. Returns `None` for non-digits.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'1' => Some(Self::Auto),
            b'2' => Some(Self::ForcedOn),
            b'0'..=b'9' => Some(Self::ForcedOff),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::ForcedOn => write!(f, "forced-on"),
            Self::ForcedOff => write!(f, "forced-off"),
        }
    }
}

/// Three manual selector inputs, one per mode.
pub struct ModeSelector;

impl ModeSelector {
    /// Resolve asserted selectors to a mode override.
    ///
    /// Fixed priority: selector 1 beats 2 beats 3 when several are
    /// asserted in the same cycle.
    pub fn resolve(asserted: [bool; 3]) -> Option<Mode> {
        const MODES: [Mode; 3] = [Mode::Auto, Mode::ForcedOn, Mode::ForcedOff];
        asserted
            .iter()
            .zip(MODES)
            .find_map(|(&on, mode)| on.then_some(mode))
    }
}
