//! Single on/off lamp (active-high LED string).

use embedded_hal::digital::OutputPin;

use crate::error::ActuatorError;

pub struct Lamp<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Lamp<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) -> Result<(), ActuatorError> {
        let result = if on { self.pin.set_high() } else { self.pin.set_low() };
        result.map_err(|_| ActuatorError::GpioWriteFailed)?;
        self.on = on;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
