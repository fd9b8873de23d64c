//! Drive and brake duty computation.
//!
//! Duties are expressed on the 10-bit LEDC scale (`0..=MAX_DUTY`).  A brushed
//! motor does not turn below roughly 20 % duty, so any non-zero drive duty
//! under the configured floor is raised to the floor.

use super::map_range;

/// Full-scale PWM duty (10-bit).
pub const MAX_DUTY: u16 = 1023;
/// Largest magnitude of a signed motor speed command.
pub const MAX_SPEED: i16 = 255;
/// Default minimum non-zero drive duty (~20 %).
pub const DEFAULT_MIN_DUTY: u16 = 200;

/// Clamp an arbitrary signed speed to `-255..=255`.
pub fn clamp_speed(value: i32) -> i16 {
    value.clamp(-i32::from(MAX_SPEED), i32::from(MAX_SPEED)) as i16
}

/// Duty for a signed speed: magnitude mapped `0..=255 → 0..=1023`, then
/// floored to `min_duty` if the result is non-zero but below it.
///
/// The sign is ignored; direction is the caller's business.
pub fn drive_duty(speed: i16, min_duty: u16) -> u16 {
    let magnitude = i64::from(speed.unsigned_abs().min(MAX_SPEED as u16));
    let duty = map_range(magnitude, 0, i64::from(MAX_SPEED), 0, i64::from(MAX_DUTY)) as u16;
    if duty > 0 && duty < min_duty {
        min_duty
    } else {
        duty
    }
}

/// Duty applied to the enable pin while dynamically braking.
pub fn brake_duty(intensity_percent: u8) -> u16 {
    let intensity = i64::from(intensity_percent.min(100));
    map_range(intensity, 0, 100, 0, i64::from(MAX_DUTY)) as u16
}
