//! Steering angle handling.
//!
//! The servo accepts 0–180°.  The chassis is straight at
//! [`Calibration::steering_center_deg`](super::Calibration), so the angle
//! reported to clients is the servo angle minus that offset.

use super::{Calibration, map_range};

/// Largest servo angle.
pub const MAX_ANGLE_DEG: u8 = 180;

/// Clamp an arbitrary angle to `0..=180`.
pub fn clamp_angle(value: i32) -> u8 {
    value.clamp(0, i32::from(MAX_ANGLE_DEG)) as u8
}

/// Pulse width for a servo angle, linear between the calibrated endpoints.
pub fn pulse_width_us(angle_deg: u8, cal: &Calibration) -> u16 {
    let angle = i64::from(angle_deg.min(MAX_ANGLE_DEG));
    map_range(
        angle,
        0,
        i64::from(MAX_ANGLE_DEG),
        i64::from(cal.servo_min_pulse_us),
        i64::from(cal.servo_max_pulse_us),
    ) as u16
}

/// Angle relative to straight ahead (negative = toward 0°).
pub fn logical_angle(angle_deg: u8, cal: &Calibration) -> i16 {
    i16::from(angle_deg) - i16::from(cal.steering_center_deg)
}
