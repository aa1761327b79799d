//! Hardware initialisation and low-level peripheral drivers.

pub mod data_line;
pub mod hw_init;
pub mod watchdog;
