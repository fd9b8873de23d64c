//! Unified error types for the RC car firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! control loop's error handling uniform.  All variants are `Copy` so they
//! can be passed through the dispatcher and transport without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A request parameter was missing or malformed.
    Param(ParamError),
    /// An actuator output could not be written.
    Actuator(ActuatorError),
    /// A communication subsystem failed.
    Comms(CommsError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(e) => write!(f, "param: {e}"),
            Self::Actuator(e) => write!(f, "actuator: {e}"),
            Self::Comms(e) => write!(f, "comms: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Request parameter errors
// ---------------------------------------------------------------------------

/// Request-validation failures.  Raised by the transport before a command
/// reaches the dispatcher, so vehicle state is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// The named parameter is absent from the query string.
    Missing(&'static str),
    /// The named parameter is present but not a valid value.
    Invalid(&'static str),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "{name} parameter missing"),
            Self::Invalid(name) => write!(f, "{name} parameter invalid"),
        }
    }
}

impl From<ParamError> for Error {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

// ---------------------------------------------------------------------------
// Actuator errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorError {
    /// PWM duty-cycle write failed.
    PwmWriteFailed,
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Self::Actuator(e)
    }
}

// ---------------------------------------------------------------------------
// Communications errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommsError {
    /// The control loop did not accept a command (queue full).
    CommandQueueFull,
}

impl fmt::Display for CommsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandQueueFull => write!(f, "command queue full"),
        }
    }
}

impl From<CommsError> for Error {
    fn from(e: CommsError) -> Self {
        Self::Comms(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_error_messages_match_wire_format() {
        assert_eq!(ParamError::Missing("angle").to_string(), "angle parameter missing");
        assert_eq!(ParamError::Invalid("duty").to_string(), "duty parameter invalid");
    }

    #[test]
    fn conversions_wrap_subsystem_errors() {
        let e: Error = ParamError::Missing("state").into();
        assert_eq!(e, Error::Param(ParamError::Missing("state")));
        assert!(Error::from(ActuatorError::PwmWriteFailed).to_string().starts_with("actuator:"));
        assert!(Error::from(CommsError::CommandQueueFull).to_string().contains("queue full"));
    }
}
