//! Outbound application events.
//!
//! The [`Dispatcher`](super::dispatcher::Dispatcher) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them (today: the serial log).

use super::state::Gear;

/// Lamp identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lamp {
    Headlight,
    StopLight,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Boot outputs applied.
    Started { steering_angle_deg: u8 },

    /// Steering applied; `logical_deg` is relative to straight ahead.
    SteeringChanged { angle_deg: u8, logical_deg: i16 },

    /// Motor output updated.
    DriveApplied { speed: i16, duty: u16 },

    /// Speed recorded while braking; outputs untouched.
    DriveSuppressed { speed: i16 },

    BrakeEngaged { intensity_percent: u8, duty: u16 },

    BrakeReleased,

    LampChanged { lamp: Lamp, on: bool },

    /// Advisory selector changed.
    SelectorChanged { gear: Gear, gas_percent: u8 },

    EmergencyStop,

    /// No command within the deadman window; motor forced to stop.
    DeadmanTripped { silent_ms: u64 },
}
