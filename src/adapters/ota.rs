//! OTA image confirmation.
//!
//! The car has no update channel of its own; images arrive over the
//! serial flasher or a factory tool.  What it must do is confirm a freshly
//! booted image so the bootloader does not roll it back.

#[cfg(target_os = "espidf")]
use log::{info, warn};

/// Mark the running image valid, cancelling any pending rollback.
/// Call once the peripherals are up.
#[cfg(target_os = "espidf")]
pub fn check_rollback() {
    match esp_ota::mark_app_valid() {
        Ok(()) => info!("OTA: firmware marked valid (rollback cancelled)"),
        Err(e) => warn!("OTA: mark_app_valid failed: {:?}", e),
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn check_rollback() {
    log::info!("OTA rollback check (simulation): skipped");
}
