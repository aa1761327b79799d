//! RoomNode firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod remote;
pub mod sensors;

pub mod pins;

// Hardware-facing layers; the actual peripheral access is guarded by cfg
// attributes inside so the crate builds and tests on the host.
pub mod adapters;
pub mod drivers;
