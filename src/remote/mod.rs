//! Remote command link: byte transport plus the line parser on top of it.

pub mod parser;
pub mod transport;

pub use parser::{COMMAND_BUFFER_CAPACITY, CommandLineParser};
pub use transport::{NullTransport, Transport};
