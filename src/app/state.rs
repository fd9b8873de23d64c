//! Vehicle state — the single authoritative record of what the car is doing.
//!
//! Owned by the [`Dispatcher`](super::dispatcher::Dispatcher) and mutated only
//! through its command methods.  Created once at boot, never persisted.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;
use crate::control::Calibration;
use crate::control::steering::logical_angle;

/// Gear selected on the client.  Advisory only: motor direction always
/// follows the sign of `motor_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gear {
    #[serde(rename = "D")]
    Drive,
    #[serde(rename = "R")]
    Reverse,
    #[default]
    #[serde(rename = "N")]
    Neutral,
}

impl Gear {
    /// Parse the single-letter code used by the control page (`D`, `R`, `N`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "D" | "d" => Some(Self::Drive),
            "R" | "r" => Some(Self::Reverse),
            "N" | "n" => Some(Self::Neutral),
            _ => None,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Self::Drive => 'D',
            Self::Reverse => 'R',
            Self::Neutral => 'N',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Servo angle, `0..=180`.
    pub steering_angle_deg: u8,
    /// Signed speed, `-255..=255`; the sign is the direction.
    pub motor_speed: i16,
    pub gear: Gear,
    /// `0..=100`.
    pub gas_percent: u8,
    pub is_braking: bool,
    /// `0..=100`.
    pub brake_intensity_percent: u8,
    pub headlight_on: bool,
    pub stop_light_on: bool,
}

impl VehicleState {
    /// Boot state: wheels straight, motor stopped, neutral, lights off,
    /// brake released.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            steering_angle_deg: config.steering_center_deg.min(180),
            motor_speed: 0,
            gear: Gear::Neutral,
            gas_percent: 0,
            is_braking: false,
            brake_intensity_percent: config.brake_intensity_percent.min(100),
            headlight_on: false,
            stop_light_on: false,
        }
    }

    /// `motor_energised` comes from the dispatcher: after a brake release
    /// `motor_speed` keeps the last request while the bridge coasts.
    pub fn snapshot(&self, cal: &Calibration, motor_energised: bool) -> StateSnapshot {
        StateSnapshot {
            steering_logical_deg: logical_angle(self.steering_angle_deg, cal),
            motor_energised,
            state: self.clone(),
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new(&SystemConfig::default())
    }
}

/// Serialisable view returned by the state query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// Steering relative to straight ahead.
    pub steering_logical_deg: i16,
    /// Motor outputs currently follow `motor_speed`.
    pub motor_energised: bool,
    #[serde(flatten)]
    pub state: VehicleState,
}
