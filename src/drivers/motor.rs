//! Drive motor on an L298N-style H-bridge.
//!
//! Two digital direction inputs select the bridge state; a PWM enable
//! input sets the effective voltage.
//!
//! | IN1 | IN2 | Bridge state                                   |
//! |-----|-----|------------------------------------------------|
//! | 0   | 0   | Coast, or dynamic brake when ENA is driven     |
//! | 1   | 0   | Forward                                        |
//! | 0   | 1   | Reverse                                        |
//!
//! The driver is a dumb actuator: it never validates direction/duty
//! combinations.  Brake precedence lives in the dispatcher.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::MotorDirection;
use crate::control::duty::MAX_DUTY;
use crate::error::ActuatorError;

pub struct HBridge<IN1, IN2, EN> {
    in1: IN1,
    in2: IN2,
    enable: EN,
    direction: MotorDirection,
    duty: u16,
}

impl<IN1, IN2, EN> HBridge<IN1, IN2, EN>
where
    IN1: OutputPin,
    IN2: OutputPin,
    EN: SetDutyCycle,
{
    /// The bridge is left as the pins were handed over; call
    /// [`set_direction`](Self::set_direction) and
    /// [`set_duty`](Self::set_duty) to put it in a known state.
    pub fn new(in1: IN1, in2: IN2, enable: EN) -> Self {
        Self {
            in1,
            in2,
            enable,
            direction: MotorDirection::Coast,
            duty: 0,
        }
    }

    pub fn set_direction(&mut self, direction: MotorDirection) -> Result<(), ActuatorError> {
        let (in1, in2) = match direction {
            MotorDirection::Coast => (false, false),
            MotorDirection::Forward => (true, false),
            MotorDirection::Reverse => (false, true),
        };
        // Release the active side first so both inputs are never high.
        if in1 {
            write_pin(&mut self.in2, in2)?;
            write_pin(&mut self.in1, in1)?;
        } else {
            write_pin(&mut self.in1, in1)?;
            write_pin(&mut self.in2, in2)?;
        }
        self.direction = direction;
        Ok(())
    }

    /// Set the enable duty on the `0..=1023` scale.
    pub fn set_duty(&mut self, duty: u16) -> Result<(), ActuatorError> {
        let duty = duty.min(MAX_DUTY);
        let scaled = u32::from(duty) * u32::from(self.enable.max_duty_cycle()) / u32::from(MAX_DUTY);
        self.enable
            .set_duty_cycle(scaled as u16)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.duty = duty;
        Ok(())
    }

    pub fn direction(&self) -> MotorDirection {
        self.direction
    }

    pub fn duty(&self) -> u16 {
        self.duty
    }
}

fn write_pin(pin: &mut impl OutputPin, high: bool) -> Result<(), ActuatorError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| ActuatorError::GpioWriteFailed)
}
