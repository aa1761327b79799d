//! Control subsystem: operating mode, lamp latch, and the automation rules
//! that turn each cycle's inputs into actuator and display outputs.

pub mod automation;
pub mod display;
pub mod latch;
pub mod mode;

pub use automation::{Actuators, AutomationController, ControlInputs};
pub use latch::LightLatch;
pub use mode::{Mode, ModeSelector};
