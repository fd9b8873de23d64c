//! Hardware adapter — bridges real peripherals to the domain port.
//!
//! Owns every actuator driver and exposes them through [`ActuatorPort`].
//! Generic over the `embedded-hal` pin types, so the same adapter runs on
//! `esp-idf-hal` LEDC/GPIO drivers on target and on mock pins on the host.
//!
//! Writes are fire-and-forget: a failing pin is logged and the domain is
//! never told.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::{ActuatorPort, MotorDirection};
use crate::drivers::lamp::Lamp;
use crate::drivers::motor::HBridge;
use crate::drivers::servo::SteeringServo;
use crate::error::{ActuatorError, Error};

/// Concrete adapter combining servo, H-bridge and lamps.
///
/// `PWM` is the type of both PWM channels, `PIN` of every digital output.
pub struct HardwareAdapter<PWM, PIN> {
    servo: SteeringServo<PWM>,
    motor: HBridge<PIN, PIN, PWM>,
    headlight: Lamp<PIN>,
    stop_light: Lamp<PIN>,
}

impl<PWM, PIN> HardwareAdapter<PWM, PIN>
where
    PWM: SetDutyCycle,
    PIN: OutputPin,
{
    pub fn new(
        servo: SteeringServo<PWM>,
        motor: HBridge<PIN, PIN, PWM>,
        headlight: Lamp<PIN>,
        stop_light: Lamp<PIN>,
    ) -> Self {
        Self {
            servo,
            motor,
            headlight,
            stop_light,
        }
    }

    pub fn motor(&self) -> &HBridge<PIN, PIN, PWM> {
        &self.motor
    }

    pub fn servo(&self) -> &SteeringServo<PWM> {
        &self.servo
    }

    pub fn headlight(&self) -> &Lamp<PIN> {
        &self.headlight
    }

    pub fn stop_light(&self) -> &Lamp<PIN> {
        &self.stop_light
    }
}

fn log_failure(what: &str, result: Result<(), ActuatorError>) {
    if let Err(e) = result {
        warn!("HW: {what}: {}", Error::from(e));
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<PWM, PIN> ActuatorPort for HardwareAdapter<PWM, PIN>
where
    PWM: SetDutyCycle,
    PIN: OutputPin,
{
    fn write_steering_pulse(&mut self, pulse_us: u16) {
        log_failure("servo", self.servo.write_pulse_us(pulse_us));
    }

    fn set_direction(&mut self, direction: MotorDirection) {
        log_failure("motor direction", self.motor.set_direction(direction));
    }

    fn set_motor_duty(&mut self, duty: u16) {
        log_failure("motor duty", self.motor.set_duty(duty));
    }

    fn set_headlight(&mut self, on: bool) {
        log_failure("headlight", self.headlight.set(on));
    }

    fn set_stop_light(&mut self, on: bool) {
        log_failure("stop light", self.stop_light.set(on));
    }
}
