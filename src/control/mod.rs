//! Numeric transforms between logical commands and output values.
//!
//! Everything here is pure integer arithmetic with no hardware access:
//! clamping of client input, the Arduino-compatible `map()` used for every
//! range conversion, drive/brake duty computation and servo pulse widths.

pub mod duty;
pub mod steering;

use crate::config::SystemConfig;

/// Calibration constants the actuator transforms need, extracted once from
/// [`SystemConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub steering_center_deg: u8,
    pub servo_min_pulse_us: u16,
    pub servo_max_pulse_us: u16,
    pub min_drive_duty: u16,
}

impl From<&SystemConfig> for Calibration {
    fn from(c: &SystemConfig) -> Self {
        Self {
            steering_center_deg: c.steering_center_deg,
            servo_min_pulse_us: c.servo_min_pulse_us,
            servo_max_pulse_us: c.servo_max_pulse_us,
            min_drive_duty: c.min_drive_duty,
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::from(&SystemConfig::default())
    }
}

/// Linear range conversion with the exact semantics of Arduino's `map()`:
/// 64-bit integer arithmetic, division truncating toward zero, no clamping.
pub fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    if in_max == in_min {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Clamp an arbitrary percentage to `0..=100`.
pub fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
