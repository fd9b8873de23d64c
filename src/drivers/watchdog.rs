//! Task Watchdog Timer (TWDT) driver.
//!
//! Wraps the ESP-IDF TWDT API to reset the car if the control loop
//! stalls.  A stalled loop means commands are no longer applied, so the
//! timeout is short.
//!
//! The control loop must call `feed()` on every iteration.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

/// Default stall limit for the control loop.
pub const DEFAULT_TIMEOUT_MS: u32 = 5_000;

pub struct Watchdog {
    timeout_ms: u32,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
    #[cfg(not(target_os = "espidf"))]
    feeds: core::cell::Cell<u64>,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

impl Watchdog {
    /// Initialise and subscribe the current task to the TWDT.
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            // SAFETY: plain FFI calls with a valid config; null handle means
            // "the calling task".
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK as esp_err_t {
                    log::warn!("TWDT reconfigure returned {} (may already be configured)", ret);
                }

                let ret = esp_task_wdt_add(core::ptr::null_mut());
                let subscribed = ret == ESP_OK as esp_err_t;
                if subscribed {
                    info!("Watchdog: control loop subscribed ({} ms, panic on trigger)", timeout_ms);
                } else {
                    log::warn!("Watchdog: failed to subscribe ({})", ret);
                }

                Self { timeout_ms, subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            info!("Watchdog(sim): {} ms, not enforced", timeout_ms);
            Self {
                timeout_ms,
                feeds: core::cell::Cell::new(0),
            }
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Feed the watchdog.  Must be called at least once per timeout.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                // SAFETY: the calling task subscribed in `new`.
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        self.feeds.set(self.feeds.get() + 1);
    }

    /// Number of feeds so far (simulation only).
    #[cfg(not(target_os = "espidf"))]
    pub fn feeds(&self) -> u64 {
        self.feeds.get()
    }
}
