//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the RC car: the vehicle
//! state record, the actuator abstraction and the command dispatcher with
//! its brake-precedence rule.  All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod actuators;
pub mod commands;
pub mod dispatcher;
pub mod events;
pub mod ports;
pub mod state;
