//! Monotonic time since boot.
//!
//! - **`target_os = "espidf"`**: wraps `esp_timer_get_time()` from the
//!   ESP-IDF high-resolution timer (microsecond precision, monotonic).
//! - **`not(target_os = "espidf")`**: uses `std::time::Instant` anchored
//!   at first use, for host-side tests and simulation.

/// Microseconds since boot.
#[cfg(target_os = "espidf")]
pub fn uptime_us() -> u64 {
    // SAFETY: reads a free-running hardware counter; no preconditions.
    (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
}

/// Microseconds since first call (simulation).
#[cfg(not(target_os = "espidf"))]
pub fn uptime_us() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_micros() as u64
}

/// Milliseconds since boot.  The dispatcher and the Wi-Fi supervisor
/// timestamp everything with this.
pub fn uptime_ms() -> u64 {
    uptime_us() / 1_000
}
