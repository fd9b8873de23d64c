//! System configuration parameters
//!
//! All tunable parameters for the RC car controller: actuator calibration,
//! PWM timing, network identity and the command-handling policy.
//! Values are compile-time defaults; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Steering servo ---
    /// Servo angle that puts the front wheels straight (mechanical zero).
    pub steering_center_deg: u8,
    /// Pulse width commanded at 0° (microseconds).
    pub servo_min_pulse_us: u16,
    /// Pulse width commanded at 180° (microseconds).
    pub servo_max_pulse_us: u16,
    /// Servo frame rate (Hz).
    pub servo_pwm_freq_hz: u32,

    // --- Drive motor ---
    /// H-bridge enable PWM frequency (Hz).
    pub motor_pwm_freq_hz: u32,
    /// Lowest non-zero duty ever applied to the motor (0-1023).
    pub min_drive_duty: u16,
    /// Dynamic-brake strength applied on brake activation (0-100%).
    pub brake_intensity_percent: u8,

    // --- Command handling ---
    /// Treat non-numeric parameters as 0 instead of rejecting them.
    pub lenient_params: bool,
    /// Stop the motor if no command arrives for this long (0 = disabled).
    pub deadman_timeout_ms: u32,

    // --- Network ---
    /// HTTP listen port.
    pub http_port: u16,
    /// mDNS hostname prefix; the MAC suffix is appended at boot.
    pub hostname_prefix: heapless::String<16>,

    // --- Timing ---
    /// Control loop interval (milliseconds)
    pub control_loop_interval_ms: u32,
    /// Wi-Fi supervisor poll interval (milliseconds)
    pub wifi_poll_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut hostname_prefix = heapless::String::new();
        let _ = hostname_prefix.push_str("rc-car");

        Self {
            // Steering: SG90-class servo, 72° is straight ahead on this chassis
            steering_center_deg: 72,
            servo_min_pulse_us: 544,
            servo_max_pulse_us: 2400,
            servo_pwm_freq_hz: 50,

            // Drive
            motor_pwm_freq_hz: 2_000, // 2 kHz suits brushed DC motors
            min_drive_duty: 200,      // ~20% of 1023
            brake_intensity_percent: 100,

            // Command handling
            lenient_params: false,
            deadman_timeout_ms: 0,

            // Network
            http_port: 80,
            hostname_prefix,

            // Timing
            control_loop_interval_ms: 5,
            wifi_poll_interval_ms: 2_000,
        }
    }
}
