//! Hobby servo on a PWM channel.
//!
//! The servo reads the high time of each frame (50 Hz → 20 ms).  A pulse
//! width in microseconds is converted to a duty on whatever resolution the
//! channel reports.

use embedded_hal::pwm::SetDutyCycle;

use crate::error::ActuatorError;

pub struct SteeringServo<P> {
    pwm: P,
    frame_us: u32,
    pulse_us: u16,
}

impl<P: SetDutyCycle> SteeringServo<P> {
    /// `frame_hz` is the frequency the channel's timer was configured with.
    pub fn new(pwm: P, frame_hz: u32) -> Self {
        Self {
            pwm,
            frame_us: 1_000_000 / frame_hz.max(1),
            pulse_us: 0,
        }
    }

    /// Command a pulse width.  Widths longer than the frame saturate at
    /// 100 % duty.
    pub fn write_pulse_us(&mut self, pulse_us: u16) -> Result<(), ActuatorError> {
        let duty = pulse_duty(pulse_us, self.frame_us, self.pwm.max_duty_cycle());
        self.pwm
            .set_duty_cycle(duty)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.pulse_us = pulse_us;
        Ok(())
    }

    /// Last pulse width successfully written.
    pub fn pulse_us(&self) -> u16 {
        self.pulse_us
    }
}

fn pulse_duty(pulse_us: u16, frame_us: u32, max_duty: u16) -> u16 {
    let pulse = u32::from(pulse_us).min(frame_us);
    (pulse * u32::from(max_duty) / frame_us) as u16
}
