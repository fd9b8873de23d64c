//! Actuator abstraction — logical command → physical outputs.
//!
//! Stateless functions over an [`ActuatorPort`].  Callers guarantee the
//! domain of every argument (the dispatcher clamps first); nothing here
//! validates or fails.
//!
//! | Command              | IN1/IN2   | ENA duty              | Stop lamp |
//! |----------------------|-----------|-----------------------|-----------|
//! | drive `0`            | LOW/LOW   | 0                     | —         |
//! | drive `> 0`          | HIGH/LOW  | `drive_duty(speed)`   | —         |
//! | drive `< 0`          | LOW/HIGH  | `drive_duty(-speed)`  | —         |
//! | brake on             | LOW/LOW   | `brake_duty(percent)` | on        |
//! | brake off            | LOW/LOW   | 0                     | off       |

use crate::control::Calibration;
use crate::control::duty::{brake_duty, drive_duty};
use crate::control::steering::pulse_width_us;

use super::ports::{ActuatorPort, MotorDirection};

/// Point the steering servo at `angle_deg` (`0..=180`).
pub fn set_steering(hw: &mut impl ActuatorPort, angle_deg: u8, cal: &Calibration) {
    hw.write_steering_pulse(pulse_width_us(angle_deg, cal));
}

/// Apply a signed speed (`-255..=255`).  Returns the duty written.
pub fn set_drive(hw: &mut impl ActuatorPort, speed: i16, cal: &Calibration) -> u16 {
    let direction = match speed {
        0 => MotorDirection::Coast,
        s if s > 0 => MotorDirection::Forward,
        _ => MotorDirection::Reverse,
    };
    let duty = drive_duty(speed, cal.min_drive_duty);
    hw.set_direction(direction);
    hw.set_motor_duty(duty);
    duty
}

/// Engage or release the dynamic brake.  Returns the duty written.
pub fn set_brake_output(hw: &mut impl ActuatorPort, active: bool, intensity_percent: u8) -> u16 {
    hw.set_direction(MotorDirection::Coast);
    let duty = if active { brake_duty(intensity_percent) } else { 0 };
    hw.set_motor_duty(duty);
    hw.set_stop_light(active);
    duty
}

pub fn set_headlight(hw: &mut impl ActuatorPort, on: bool) {
    hw.set_headlight(on);
}

pub fn set_stop_light(hw: &mut impl ActuatorPort, on: bool) {
    hw.set_stop_light(on);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Pins {
        pulse_us: u16,
        direction: Option<MotorDirection>,
        duty: u16,
        headlight: bool,
        stop_light: bool,
    }

    impl ActuatorPort for Pins {
        fn write_steering_pulse(&mut self, pulse_us: u16) {
            self.pulse_us = pulse_us;
        }
        fn set_direction(&mut self, direction: MotorDirection) {
            self.direction = Some(direction);
        }
        fn set_motor_duty(&mut self, duty: u16) {
            self.duty = duty;
        }
        fn set_headlight(&mut self, on: bool) {
            self.headlight = on;
        }
        fn set_stop_light(&mut self, on: bool) {
            self.stop_light = on;
        }
    }

    #[test]
    fn steering_writes_pulse() {
        let mut hw = Pins::default();
        set_steering(&mut hw, 180, &Calibration::default());
        assert_eq!(hw.pulse_us, 2400);
    }

    #[test]
    fn drive_sign_selects_direction() {
        let cal = Calibration::default();
        let mut hw = Pins::default();

        assert_eq!(set_drive(&mut hw, 255, &cal), 1023);
        assert_eq!(hw.direction, Some(MotorDirection::Forward));

        assert_eq!(set_drive(&mut hw, -20, &cal), 200);
        assert_eq!(hw.direction, Some(MotorDirection::Reverse));
        assert_eq!(hw.duty, 200);

        assert_eq!(set_drive(&mut hw, 0, &cal), 0);
        assert_eq!(hw.direction, Some(MotorDirection::Coast));
        assert_eq!(hw.duty, 0);
    }

    #[test]
    fn brake_forces_coast_and_stop_lamp() {
        let mut hw = Pins::default();
        set_drive(&mut hw, 200, &Calibration::default());

        assert_eq!(set_brake_output(&mut hw, true, 100), 1023);
        assert_eq!(hw.direction, Some(MotorDirection::Coast));
        assert!(hw.stop_light);

        assert_eq!(set_brake_output(&mut hw, false, 100), 0);
        assert_eq!(hw.direction, Some(MotorDirection::Coast));
        assert_eq!(hw.duty, 0);
        assert!(!hw.stop_light);
    }

    #[test]
    fn lamps_are_plain_writes() {
        let mut hw = Pins::default();
        set_headlight(&mut hw, true);
        set_stop_light(&mut hw, true);
        assert!(hw.headlight && hw.stop_light);
        set_headlight(&mut hw, false);
        assert!(!hw.headlight);
    }
}
