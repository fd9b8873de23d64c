//! Device identity derived from the ESP32 factory MAC address.
//!
//! Cars on the same network need distinct names.  The last three MAC
//! bytes, appended to the configured hostname prefix, give a stable name
//! such as `rc-car-efcafe` that survives reboots and reflashes.

use core::fmt::Write;

/// mDNS hostname, e.g. `rc-car-efcafe`.
pub type Hostname = heapless::String<24>;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    // SAFETY: `mac` is a valid 6-byte buffer.
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
}

/// `<prefix>-xxyyzz` from the last 3 MAC bytes, lowercase.  An over-long
/// prefix is truncated so the suffix always fits.
pub fn hostname(prefix: &str, mac: &MacAddress) -> Hostname {
    const SUFFIX_LEN: usize = 7; // "-xxyyzz"
    let mut name = Hostname::new();
    let keep = prefix
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= name.capacity() - SUFFIX_LEN)
        .last()
        .unwrap_or(0);
    let _ = name.push_str(&prefix[..keep]);
    let _ = write!(name, "-{:02x}{:02x}{:02x}", mac[3], mac[4], mac[5]);
    name
}
