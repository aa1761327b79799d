//! Application core — pure domain orchestration, zero I/O.
//!
//! This module wires the room-node rules together: remote commands,
//! climate sampling cadence and the automation controller. All
//! interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
