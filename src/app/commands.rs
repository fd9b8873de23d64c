//! Inbound commands to the dispatcher and the replies it produces.
//!
//! Commands carry raw client integers; the
//! [`Dispatcher`](super::dispatcher::Dispatcher) clamps them.  Requests that
//! fail validation (missing parameter) never become a command at all.

use std::fmt;

use super::state::{Gear, StateSnapshot};

/// Commands the transport can send into the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Steering servo angle in degrees (clamped to `0..=180`).
    SetSteering(i32),

    /// Signed motor speed (clamped to `-255..=255`).
    SetDrive(i32),

    /// Engage (`true`) or release the dynamic brake.
    SetBrake(bool),

    ToggleHeadlight,

    ToggleStopLight,

    /// Static firmware version and build timestamp.
    GetVersion,

    /// Record the client's gear selector (advisory).
    SetGear(Gear),

    /// Record the client's throttle position (advisory, clamped to `0..=100`).
    SetGas(i32),

    /// Neutral, zero gas, motor stopped, wheels straight.
    EmergencyStop,

    /// Full state snapshot.
    GetState,
}

/// Dispatcher result for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    /// Command applied.
    Ok,
    /// Brake is active: the brake command engaged it, or a drive command was
    /// recorded but not applied.
    Braking,
    /// Brake released.
    Released,
    /// New state of a toggled lamp.
    Light(bool),
    Version(&'static str),
    State(StateSnapshot),
}

impl fmt::Display for CommandReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Braking => write!(f, "BRAKING"),
            Self::Released => write!(f, "RELEASED"),
            Self::Light(true) => write!(f, "ON"),
            Self::Light(false) => write!(f, "OFF"),
            Self::Version(v) => write!(f, "{v}"),
            Self::State(s) => {
                let json = serde_json::to_string(s).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}
