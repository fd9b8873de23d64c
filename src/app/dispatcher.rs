//! Command dispatcher — the hexagonal core.
//!
//! [`Dispatcher`] owns the [`VehicleState`], the calibration and the deadman
//! supervisor.  Every command flows through one method here: clamp the
//! input, update state, drive the outputs through [`super::actuators`],
//! report the result.  All I/O goes through port traits injected at call
//! sites, so the whole core runs against mock adapters on the host.
//!
//! ```text
//!  Transport ──▶ ┌─────────────────────┐ ──▶ EventSink
//!                │     Dispatcher      │
//! ActuatorPort ◀─│ State · Brake · DMS │
//!                └─────────────────────┘
//! ```
//!
//! Brake precedence: while the brake is active, drive commands update the
//! stored speed but never reach the motor outputs.

use log::info;

use crate::config::SystemConfig;
use crate::control::duty::clamp_speed;
use crate::control::steering::{clamp_angle, logical_angle};
use crate::control::{Calibration, clamp_percent};
use crate::safety::Deadman;

use super::actuators;
use super::commands::{AppCommand, CommandReply};
use super::events::{AppEvent, Lamp};
use super::ports::{ActuatorPort, EventSink};
use super::state::{Gear, StateSnapshot, VehicleState};

/// Reported by the version query: `"v<semver> | <build timestamp>"`.
pub const VERSION_STRING: &str = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    " | ",
    env!("RCCAR_BUILD_TIMESTAMP")
);

pub struct Dispatcher {
    state: VehicleState,
    cal: Calibration,
    deadman: Deadman,
    /// Motor outputs currently reflect a non-zero `motor_speed`.
    motor_energised: bool,
}

impl Dispatcher {
    /// Build the dispatcher with boot-state defaults.  Outputs are not
    /// touched until [`start`](Self::start).
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            state: VehicleState::new(config),
            cal: Calibration::from(config),
            deadman: Deadman::new(config),
            motor_energised: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output to match the boot state.
    pub fn start(&mut self, now_ms: u64, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        actuators::set_steering(hw, self.state.steering_angle_deg, &self.cal);
        actuators::set_drive(hw, 0, &self.cal);
        actuators::set_headlight(hw, self.state.headlight_on);
        actuators::set_stop_light(hw, self.state.stop_light_on);
        self.motor_energised = false;
        self.deadman.feed(now_ms);

        sink.emit(&AppEvent::Started {
            steering_angle_deg: self.state.steering_angle_deg,
        });
        info!(
            "Dispatcher started (steering {}°, deadman {})",
            self.state.steering_angle_deg,
            if self.deadman.is_enabled() { "on" } else { "off" }
        );
    }

    /// Periodic supervision: the deadman check.
    pub fn tick(&mut self, now_ms: u64, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        if let Some(silent_ms) = self.deadman.check(now_ms, self.motor_energised) {
            self.state.motor_speed = 0;
            actuators::set_drive(hw, 0, &self.cal);
            self.motor_energised = false;
            sink.emit(&AppEvent::DeadmanTripped { silent_ms });
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Route one transport command.  Counts as client activity.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        now_ms: u64,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        self.deadman.feed(now_ms);
        match cmd {
            AppCommand::SetSteering(angle) => self.set_steering(angle, hw, sink),
            AppCommand::SetDrive(speed) => self.set_drive(speed, hw, sink),
            AppCommand::SetBrake(active) => self.set_brake(active, hw, sink),
            AppCommand::ToggleHeadlight => self.toggle_headlight(hw, sink),
            AppCommand::ToggleStopLight => self.toggle_stop_light(hw, sink),
            AppCommand::GetVersion => CommandReply::Version(Self::version()),
            AppCommand::SetGear(gear) => self.set_gear(gear, sink),
            AppCommand::SetGas(percent) => self.set_gas(percent, sink),
            AppCommand::EmergencyStop => self.emergency_stop(hw, sink),
            AppCommand::GetState => CommandReply::State(self.snapshot()),
        }
    }

    pub fn set_steering(
        &mut self,
        angle: i32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        let angle = clamp_angle(angle);
        self.state.steering_angle_deg = angle;
        actuators::set_steering(hw, angle, &self.cal);
        sink.emit(&AppEvent::SteeringChanged {
            angle_deg: angle,
            logical_deg: logical_angle(angle, &self.cal),
        });
        CommandReply::Ok
    }

    pub fn set_drive(
        &mut self,
        speed: i32,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        let speed = clamp_speed(speed);
        self.state.motor_speed = speed;

        if self.state.is_braking {
            sink.emit(&AppEvent::DriveSuppressed { speed });
            return CommandReply::Braking;
        }

        let duty = actuators::set_drive(hw, speed, &self.cal);
        self.motor_energised = speed != 0;
        sink.emit(&AppEvent::DriveApplied { speed, duty });
        CommandReply::Ok
    }

    /// Engage or release the brake.  Release leaves the motor stopped; the
    /// stored speed is not resumed.
    pub fn set_brake(
        &mut self,
        active: bool,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        self.state.is_braking = active;
        self.state.stop_light_on = active;
        self.motor_energised = false;

        let intensity = self.state.brake_intensity_percent;
        let duty = actuators::set_brake_output(hw, active, intensity);

        if active {
            sink.emit(&AppEvent::BrakeEngaged {
                intensity_percent: intensity,
                duty,
            });
            CommandReply::Braking
        } else {
            sink.emit(&AppEvent::BrakeReleased);
            CommandReply::Released
        }
    }

    pub fn toggle_headlight(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        let on = !self.state.headlight_on;
        self.state.headlight_on = on;
        actuators::set_headlight(hw, on);
        sink.emit(&AppEvent::LampChanged {
            lamp: Lamp::Headlight,
            on,
        });
        CommandReply::Light(on)
    }

    pub fn toggle_stop_light(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        let on = !self.state.stop_light_on;
        self.state.stop_light_on = on;
        actuators::set_stop_light(hw, on);
        sink.emit(&AppEvent::LampChanged {
            lamp: Lamp::StopLight,
            on,
        });
        CommandReply::Light(on)
    }

    pub const fn version() -> &'static str {
        VERSION_STRING
    }

    /// Record the advisory gear selector.  No output changes.
    pub fn set_gear(&mut self, gear: Gear, sink: &mut impl EventSink) -> CommandReply {
        self.state.gear = gear;
        self.emit_selector(sink);
        CommandReply::Ok
    }

    /// Record the advisory throttle position.  No output changes.
    pub fn set_gas(&mut self, percent: i32, sink: &mut impl EventSink) -> CommandReply {
        self.state.gas_percent = clamp_percent(percent);
        self.emit_selector(sink);
        CommandReply::Ok
    }

    /// Neutral, zero gas, stop the motor and straighten the wheels.  The
    /// stop goes through [`set_drive`](Self::set_drive), so an active brake
    /// stays in charge of the motor outputs.
    pub fn emergency_stop(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> CommandReply {
        self.state.gear = Gear::Neutral;
        self.state.gas_percent = 0;
        self.set_drive(0, hw, sink);
        self.set_steering(i32::from(self.cal.steering_center_deg), hw, sink);
        sink.emit(&AppEvent::EmergencyStop);
        CommandReply::Ok
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot(&self.cal, self.motor_energised)
    }

    fn emit_selector(&self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::SelectorChanged {
            gear: self.state.gear,
            gas_percent: self.state.gas_percent,
        });
    }
}
