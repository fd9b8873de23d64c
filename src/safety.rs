//! Deadman supervisor.
//!
//! Tracks the time of the last accepted command.  When enabled and the car
//! is physically driving, silence longer than the timeout trips the
//! supervisor once; the dispatcher then stops the motor.
//!
//! ## Lifecycle
//!
//! 1. Every dispatched command calls [`Deadman::feed`], which re-arms it.
//! 2. The control loop calls [`Deadman::check`] each tick.
//! 3. The first check past the deadline while driving returns the silence
//!    length; later checks return `None` until the next feed.
//!
//! A timeout of `0` disables the supervisor entirely.

use log::warn;

use crate::config::SystemConfig;

#[derive(Debug, Clone)]
pub struct Deadman {
    timeout_ms: u64,
    last_feed_ms: u64,
    tripped: bool,
}

impl Deadman {
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_timeout(u64::from(config.deadman_timeout_ms))
    }

    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_feed_ms: 0,
            tripped: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.timeout_ms > 0
    }

    /// Record client activity.
    pub fn feed(&mut self, now_ms: u64) {
        self.last_feed_ms = now_ms;
        self.tripped = false;
    }

    /// Returns `Some(silent_ms)` the first time the deadline is exceeded
    /// while `driving`.
    pub fn check(&mut self, now_ms: u64, driving: bool) -> Option<u64> {
        if !self.is_enabled() || self.tripped || !driving {
            return None;
        }
        let silent = now_ms.saturating_sub(self.last_feed_ms);
        if silent <= self.timeout_ms {
            return None;
        }
        warn!("DEADMAN: no command for {silent} ms (limit {} ms)", self.timeout_ms);
        self.tripped = true;
        Some(silent)
    }
}
