//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART / USB-CDC on the car).  Each line starts with
//! a short tag so a serial capture can be filtered with `grep`.

use log::{info, warn};

use crate::app::events::{AppEvent, Lamp};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { steering_angle_deg } => {
                info!("START | steering={}\u{00b0} | motor stopped | lamps off", steering_angle_deg);
            }
            AppEvent::SteeringChanged { angle_deg, logical_deg } => {
                info!("STEER | angle={}\u{00b0} (logical {:+})", angle_deg, logical_deg);
            }
            AppEvent::DriveApplied { speed, duty } => {
                info!("DRIVE | speed={} duty={}", speed, duty);
            }
            AppEvent::DriveSuppressed { speed } => {
                info!("DRIVE | speed={} ignored while braking", speed);
            }
            AppEvent::BrakeEngaged { intensity_percent, duty } => {
                info!("BRAKE | engaged {}% duty={}", intensity_percent, duty);
            }
            AppEvent::BrakeReleased => {
                info!("BRAKE | released");
            }
            AppEvent::LampChanged { lamp, on } => {
                let name = match lamp {
                    Lamp::Headlight => "headlight",
                    Lamp::StopLight => "stoplight",
                };
                info!("LAMP  | {} {}", name, on_off(*on));
            }
            AppEvent::SelectorChanged { gear, gas_percent } => {
                info!("GEAR  | {} gas={}%", gear.code(), gas_percent);
            }
            AppEvent::EmergencyStop => {
                warn!("STOP  | emergency stop");
            }
            AppEvent::DeadmanTripped { silent_ms } => {
                warn!("SAFE  | no command for {} ms, motor stopped", silent_ms);
            }
        }
    }
}
