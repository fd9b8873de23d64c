//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Dispatcher (domain)
//! ```
//!
//! Driven adapters (actuators, event sinks) implement these traits.  The
//! [`Dispatcher`](super::dispatcher::Dispatcher) consumes them via generics,
//! so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// H-bridge direction input pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorDirection {
    /// IN1 = LOW, IN2 = LOW.
    Coast,
    /// IN1 = HIGH, IN2 = LOW.
    Forward,
    /// IN1 = LOW, IN2 = HIGH.
    Reverse,
}

/// Write-side port: raw physical outputs.
///
/// Implementations perform no validation; the actuator abstraction in
/// [`super::actuators`] guarantees every value is in range.  Writes are
/// fire-and-forget: a failing pin is logged by the adapter, never reported
/// back into the domain.
pub trait ActuatorPort {
    /// Command the steering servo to a pulse width (microseconds).
    fn write_steering_pulse(&mut self, pulse_us: u16);

    /// Drive the two H-bridge direction inputs.
    fn set_direction(&mut self, direction: MotorDirection);

    /// Set the H-bridge enable duty (`0..=1023`).
    fn set_motor_duty(&mut self, duty: u16);

    /// Switch the headlights.
    fn set_headlight(&mut self, on: bool);

    /// Switch the stop lamp.
    fn set_stop_light(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
