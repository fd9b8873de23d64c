//! GPIO / peripheral pin assignments for the RC car main board (ESP32 DevKit).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.
//! The peripheral bring-up in [`crate::drivers::hw_init`] binds these numbers
//! to typed `esp-idf-hal` pins.
//!
//! Outputs avoid the ESP32 strapping pins (GPIO0, 2, 5, 12, 15): an H-bridge
//! or lamp holding one of them at reset changes the boot mode or flash
//! voltage.

// ---------------------------------------------------------------------------
// Steering servo
// ---------------------------------------------------------------------------

/// LEDC PWM output to the servo signal wire (50 Hz frame).
pub const SERVO_PWM_GPIO: i32 = 14;

// ---------------------------------------------------------------------------
// Drive motor (L298N / L293D H-bridge)
// ---------------------------------------------------------------------------

/// ENA — LEDC PWM speed control.
pub const MOTOR_ENA_GPIO: i32 = 25;
/// IN1 — HIGH together with IN2 LOW drives forward.
pub const MOTOR_IN1_GPIO: i32 = 26;
/// IN2 — HIGH together with IN1 LOW drives reverse.
pub const MOTOR_IN2_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Lamps (two LEDs in series each)
// ---------------------------------------------------------------------------

/// Rear stop lamp, active HIGH.
pub const STOP_LED_GPIO: i32 = 33;
/// Front headlights, active HIGH.
pub const HEADLIGHT_GPIO: i32 = 32;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC resolution for the drive motor.  10 bits gives the 0 – 1023 duty range
/// the duty transforms are expressed in.
pub const MOTOR_PWM_RESOLUTION_BITS: u32 = 10;
/// LEDC resolution for the servo.  14 bits at 50 Hz is ~1.2 µs per step.
pub const SERVO_PWM_RESOLUTION_BITS: u32 = 14;
