//! Actuator drivers, hardware initialisation, and the task watchdog.

pub mod hw_init;
pub mod lamp;
pub mod motor;
pub mod servo;
pub mod watchdog;
