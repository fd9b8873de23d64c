//! RC car firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod http;
pub mod pins;
pub mod safety;

// Hardware-facing modules; host builds get simulation stubs.
pub mod adapters;
pub mod drivers;
