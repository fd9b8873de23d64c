//! Mock hardware adapter for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.

use rccar::app::events::AppEvent;
use rccar::app::ports::{ActuatorPort, EventSink, MotorDirection};

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SteeringPulse(u16),
    Direction(MotorDirection),
    MotorDuty(u16),
    Headlight(bool),
    StopLight(bool),
}

// ── MockHardware ──────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MockHardware {
    pub calls: Vec<ActuatorCall>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn last<T>(&self, pick: impl Fn(&ActuatorCall) -> Option<T>) -> Option<T> {
        self.calls.iter().rev().find_map(pick)
    }

    pub fn pulse_us(&self) -> Option<u16> {
        self.last(|c| match c {
            ActuatorCall::SteeringPulse(p) => Some(*p),
            _ => None,
        })
    }

    pub fn direction(&self) -> MotorDirection {
        self.last(|c| match c {
            ActuatorCall::Direction(d) => Some(*d),
            _ => None,
        })
        .unwrap_or(MotorDirection::Coast)
    }

    pub fn duty(&self) -> u16 {
        self.last(|c| match c {
            ActuatorCall::MotorDuty(d) => Some(*d),
            _ => None,
        })
        .unwrap_or(0)
    }

    pub fn headlight(&self) -> bool {
        self.last(|c| match c {
            ActuatorCall::Headlight(on) => Some(*on),
            _ => None,
        })
        .unwrap_or(false)
    }

    pub fn stop_light(&self) -> bool {
        self.last(|c| match c {
            ActuatorCall::StopLight(on) => Some(*on),
            _ => None,
        })
        .unwrap_or(false)
    }
}

impl ActuatorPort for MockHardware {
    fn write_steering_pulse(&mut self, pulse_us: u16) {
        self.calls.push(ActuatorCall::SteeringPulse(pulse_us));
    }

    fn set_direction(&mut self, direction: MotorDirection) {
        self.calls.push(ActuatorCall::Direction(direction));
    }

    fn set_motor_duty(&mut self, duty: u16) {
        self.calls.push(ActuatorCall::MotorDuty(duty));
    }

    fn set_headlight(&mut self, on: bool) {
        self.calls.push(ActuatorCall::Headlight(on));
    }

    fn set_stop_light(&mut self, on: bool) {
        self.calls.push(ActuatorCall::StopLight(on));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&AppEvent> {
        self.events.last()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
