//! Inbound commands to the application service.
//!
//! These represent actions requested by the outside world over the serial
//! link. The [`CommandLineParser`](crate::remote::parser::CommandLineParser)
//! produces them and the [`NodeService`](super::service::NodeService)
//! hands them to the automation controller as a remote mode override.

use crate::control::Mode;

/// Commands the remote link can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `SETMODE:<digit>`: switch the operating mode.
    SetMode(Mode),
}

impl Command {
    /// Mode this command requests, if any.
    pub fn requested_mode(self) -> Option<Mode> {
        match self {
            Self::SetMode(mode) => Some(mode),
        }
    }
}
