//! mDNS service advertisement adapter.
//!
//! Advertises `<hostname>.local` and an `_http._tcp` service on the
//! control page port, so a phone can open `http://rc-car-xxyyzz.local/`
//! without knowing the DHCP address.  No-op on simulation targets.
//!
//! Lifecycle is tied to Wi-Fi: start on connect, stop on disconnect.

use log::info;

use super::device_id::Hostname;

const MDNS_SERVICE_TYPE: &str = "_http";
#[cfg(target_os = "espidf")]
const MDNS_SERVICE_PROTO: &str = "_tcp";

/// mDNS advertisement adapter.
pub struct MdnsAdapter {
    hostname: Hostname,
    port: u16,
    active: bool,
}

impl MdnsAdapter {
    pub fn new(hostname: Hostname, port: u16) -> Self {
        Self {
            hostname,
            port,
            active: false,
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whether mDNS is currently advertising.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start hostname + service advertisement.  Call once the station has
    /// an IP address.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        if self.platform_start() {
            self.active = true;
            info!(
                "mDNS: advertising http://{}.local:{} ({}._tcp)",
                self.hostname, self.port, MDNS_SERVICE_TYPE
            );
        }
    }

    /// Stop advertisement.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.platform_stop();
        self.active = false;
        info!("mDNS: stopped");
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_start(&self) -> bool {
        use esp_idf_svc::sys::*;

        fn c_buf<const N: usize>(s: &str) -> [u8; N] {
            let mut buf = [0u8; N];
            let len = s.len().min(N - 1);
            buf[..len].copy_from_slice(&s.as_bytes()[..len]);
            buf
        }

        let hostname: [u8; 32] = c_buf(&self.hostname);
        let svc_type: [u8; 8] = c_buf(MDNS_SERVICE_TYPE);
        let svc_proto: [u8; 8] = c_buf(MDNS_SERVICE_PROTO);
        let version = concat!(env!("CARGO_PKG_VERSION"), "\0");

        // SAFETY: every pointer refers to a NUL-terminated buffer that
        // outlives the call; the mDNS component copies what it keeps.
        unsafe {
            let ret = mdns_init();
            if ret != ESP_OK as esp_err_t {
                log::error!("mDNS: mdns_init failed ({})", ret);
                return false;
            }
            mdns_hostname_set(hostname.as_ptr() as *const _);
            mdns_instance_name_set(b"RC Car\0".as_ptr() as *const _);
            let ret = mdns_service_add(
                b"RC Car\0".as_ptr() as *const _,
                svc_type.as_ptr() as *const _,
                svc_proto.as_ptr() as *const _,
                self.port,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK as esp_err_t {
                log::warn!("mDNS: service add failed ({}), hostname only", ret);
                return true;
            }
            mdns_service_txt_item_set(
                svc_type.as_ptr() as *const _,
                svc_proto.as_ptr() as *const _,
                b"version\0".as_ptr() as *const _,
                version.as_ptr() as *const _,
            );
        }
        true
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_start(&self) -> bool {
        info!(
            "mDNS(sim): registered {}.local {}:{} v={}",
            self.hostname,
            MDNS_SERVICE_TYPE,
            self.port,
            env!("CARGO_PKG_VERSION"),
        );
        true
    }

    #[cfg(target_os = "espidf")]
    fn platform_stop(&self) {
        // SAFETY: only reached after a successful `mdns_init`.
        unsafe {
            esp_idf_svc::sys::mdns_free();
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_stop(&self) {
        info!("mDNS(sim): unregistered");
    }
}
