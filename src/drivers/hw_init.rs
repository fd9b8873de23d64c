//! One-shot hardware peripheral initialization.
//!
//! Configures the two LEDC timers (servo frame, motor PWM), their channels
//! and the digital outputs, then hands them to the drivers.  Called once
//! from `main()` before the control loop starts.  Pin numbers come from
//! [`crate::pins`].

#[cfg(target_os = "espidf")]
use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};
#[cfg(target_os = "espidf")]
use esp_idf_hal::ledc::config::TimerConfig;
#[cfg(target_os = "espidf")]
use esp_idf_hal::ledc::{LEDC, LedcDriver, LedcTimerDriver, Resolution};
#[cfg(target_os = "espidf")]
use esp_idf_hal::units::Hertz;
#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::adapters::hardware::HardwareAdapter;
#[cfg(target_os = "espidf")]
use crate::config::SystemConfig;
#[cfg(target_os = "espidf")]
use crate::drivers::{lamp::Lamp, motor::HBridge, servo::SteeringServo};
#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    GpioConfigFailed(i32),
    /// A `pins::*_PWM_RESOLUTION_BITS` value the LEDC timers cannot run at.
    UnsupportedResolution(u32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::UnsupportedResolution(bits) => {
                write!(f, "unsupported LEDC resolution ({} bits)", bits)
            }
        }
    }
}

impl From<HwInitError> for crate::error::Error {
    fn from(_: HwInitError) -> Self {
        Self::Init("peripheral bring-up")
    }
}

/// LEDC timer resolutions accepted for the board's PWM outputs.
pub const SUPPORTED_RESOLUTION_BITS: core::ops::RangeInclusive<u32> = 8..=14;

#[cfg(target_os = "espidf")]
fn resolution(bits: u32) -> Result<Resolution, HwInitError> {
    Ok(match bits {
        8 => Resolution::Bits8,
        9 => Resolution::Bits9,
        10 => Resolution::Bits10,
        11 => Resolution::Bits11,
        12 => Resolution::Bits12,
        13 => Resolution::Bits13,
        14 => Resolution::Bits14,
        other => return Err(HwInitError::UnsupportedResolution(other)),
    })
}

#[cfg(target_os = "espidf")]
pub type OutPin = PinDriver<'static, AnyOutputPin, Output>;

/// The adapter as wired on the car.
#[cfg(target_os = "espidf")]
pub type BoardHardware = HardwareAdapter<LedcDriver<'static>, OutPin>;

#[cfg(target_os = "espidf")]
fn output(gpio: i32) -> Result<OutPin, HwInitError> {
    // SAFETY: every GPIO number in `pins` is used exactly once, here.
    let pin = unsafe { AnyOutputPin::new(gpio) };
    let mut driver = PinDriver::output(pin).map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    driver
        .set_low()
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    Ok(driver)
}

/// Bring up every actuator output and return the wired adapter, with all
/// outputs low / zero duty.
#[cfg(target_os = "espidf")]
pub fn init_hardware(ledc: LEDC, config: &SystemConfig) -> Result<BoardHardware, HwInitError> {
    // Timers run for the life of the firmware; dropping one would pause it,
    // so both are leaked.
    // Timer 0: servo frame (50 Hz)
    let servo_cfg = TimerConfig::new()
        .frequency(Hertz(config.servo_pwm_freq_hz))
        .resolution(resolution(pins::SERVO_PWM_RESOLUTION_BITS)?);
    let servo_timer = LedcTimerDriver::new(ledc.timer0, &servo_cfg)
        .map_err(|e| HwInitError::LedcTimerFailed(e.code()))?;
    let servo_timer = &*Box::leak(Box::new(servo_timer));

    // Timer 1: motor enable (2 kHz)
    let motor_cfg = TimerConfig::new()
        .frequency(Hertz(config.motor_pwm_freq_hz))
        .resolution(resolution(pins::MOTOR_PWM_RESOLUTION_BITS)?);
    let motor_timer = LedcTimerDriver::new(ledc.timer1, &motor_cfg)
        .map_err(|e| HwInitError::LedcTimerFailed(e.code()))?;
    let motor_timer = &*Box::leak(Box::new(motor_timer));

    // SAFETY: as in `output`.
    let servo_pin = unsafe { AnyOutputPin::new(pins::SERVO_PWM_GPIO) };
    let servo_pwm = LedcDriver::new(ledc.channel0, servo_timer, servo_pin)
        .map_err(|e| HwInitError::LedcChannelFailed(e.code()))?;

    // SAFETY: as in `output`.
    let ena_pin = unsafe { AnyOutputPin::new(pins::MOTOR_ENA_GPIO) };
    let mut motor_pwm = LedcDriver::new(ledc.channel1, motor_timer, ena_pin)
        .map_err(|e| HwInitError::LedcChannelFailed(e.code()))?;
    motor_pwm
        .set_duty(0)
        .map_err(|e| HwInitError::LedcChannelFailed(e.code()))?;

    let motor = HBridge::new(
        output(pins::MOTOR_IN1_GPIO)?,
        output(pins::MOTOR_IN2_GPIO)?,
        motor_pwm,
    );

    info!(
        "hw_init: servo GPIO{} @ {} Hz, motor ENA GPIO{} @ {} Hz, IN1/IN2 GPIO{}/{}, lamps GPIO{}/{}",
        pins::SERVO_PWM_GPIO,
        config.servo_pwm_freq_hz,
        pins::MOTOR_ENA_GPIO,
        config.motor_pwm_freq_hz,
        pins::MOTOR_IN1_GPIO,
        pins::MOTOR_IN2_GPIO,
        pins::HEADLIGHT_GPIO,
        pins::STOP_LED_GPIO,
    );

    Ok(HardwareAdapter::new(
        SteeringServo::new(servo_pwm, config.servo_pwm_freq_hz),
        motor,
        Lamp::new(output(pins::HEADLIGHT_GPIO)?),
        Lamp::new(output(pins::STOP_LED_GPIO)?),
    ))
}
