//! WiFi station-mode adapter.
//!
//! Implements [`ConnectivityPort`], the hexagonal boundary for network
//! connectivity.  A supervisor thread owns the adapter, polls it and
//! publishes [`LinkStatus`] through [`LINK_STATUS`] for the control loop.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF WiFi driver calls via `esp_idf_svc::wifi`.
//! - **all other targets**: simulation stubs for host-side tests.
//!
//! ## Reconnection policy
//!
//! On disconnect the adapter waits an exponential backoff (2 s → 4 s →
//! 8 s … capped at 60 s) between attempts.

use core::fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use log::{error, info, warn};

#[cfg(target_os = "espidf")]
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};

// ───────────────────────────────────────────────────────────────
// Port trait
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    NoCredentials,
    InvalidSsid,
    InvalidPassword,
    ConnectionFailed,
    AlreadyConnected,
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCredentials => write!(f, "no WiFi credentials configured"),
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)"),
            Self::ConnectionFailed => write!(f, "WiFi connection failed"),
            Self::AlreadyConnected => write!(f, "already connected to AP"),
        }
    }
}

pub trait ConnectivityPort {
    fn connect(&mut self, now_ms: u64) -> Result<(), ConnectivityError>;
    fn is_connected(&self) -> bool;
    fn poll(&mut self, now_ms: u64);
    fn set_credentials(&mut self, ssid: &str, password: &str) -> Result<(), ConnectivityError>;
    fn rssi(&self) -> Option<i8>;
}

// ───────────────────────────────────────────────────────────────
// Connection state
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
}

/// Snapshot published to the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkStatus {
    pub connected: bool,
    pub rssi: Option<i8>,
}

/// Latest link status; the control loop takes it with `try_take`.
pub static LINK_STATUS: Signal<CriticalSectionRawMutex, LinkStatus> = Signal::new();

const INITIAL_BACKOFF_SECS: u32 = 2;
const MAX_BACKOFF_SECS: u32 = 60;

/// Credentials baked in at build time (`RCCAR_WIFI_SSID` / `RCCAR_WIFI_PASS`).
pub const BUILD_SSID: Option<&str> = option_env!("RCCAR_WIFI_SSID");
pub const BUILD_PASSWORD: Option<&str> = option_env!("RCCAR_WIFI_PASS");

// ───────────────────────────────────────────────────────────────
// Validation
// ───────────────────────────────────────────────────────────────

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

fn validate_ssid(ssid: &str) -> Result<(), ConnectivityError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(ConnectivityError::InvalidSsid);
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ConnectivityError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(ConnectivityError::InvalidPassword);
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// WiFi adapter
// ───────────────────────────────────────────────────────────────

pub struct WifiAdapter {
    state: WifiState,
    ssid: heapless::String<32>,
    password: heapless::String<64>,
    backoff_secs: u32,
    next_attempt_ms: u64,
    last_rssi: Option<i8>,
    #[cfg(target_os = "espidf")]
    driver: BlockingWifi<EspWifi<'static>>,
    /// Simulation: number of upcoming connect attempts that fail.
    #[cfg(not(target_os = "espidf"))]
    sim_failures: u32,
    /// Simulation: whether the fake AP is reachable.
    #[cfg(not(target_os = "espidf"))]
    sim_link_up: bool,
}

impl WifiAdapter {
    #[cfg(target_os = "espidf")]
    pub fn new(driver: BlockingWifi<EspWifi<'static>>) -> Self {
        Self {
            state: WifiState::Disconnected,
            ssid: heapless::String::new(),
            password: heapless::String::new(),
            backoff_secs: INITIAL_BACKOFF_SECS,
            next_attempt_ms: 0,
            last_rssi: None,
            driver,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self {
            state: WifiState::Disconnected,
            ssid: heapless::String::new(),
            password: heapless::String::new(),
            backoff_secs: INITIAL_BACKOFF_SECS,
            next_attempt_ms: 0,
            last_rssi: None,
            sim_failures: 0,
            sim_link_up: false,
        }
    }

    pub fn state(&self) -> WifiState {
        self.state
    }

    pub fn backoff_secs(&self) -> u32 {
        self.backoff_secs
    }

    pub fn link_status(&self) -> LinkStatus {
        LinkStatus {
            connected: self.is_connected(),
            rssi: self.rssi(),
        }
    }

    /// Make the next `n` connect attempts fail.
    #[cfg(not(target_os = "espidf"))]
    pub fn simulate_failures(&mut self, n: u32) {
        self.sim_failures = n;
    }

    /// Drop the simulated link as if the AP vanished.
    #[cfg(not(target_os = "espidf"))]
    pub fn simulate_link_loss(&mut self) {
        self.sim_link_up = false;
    }

    fn schedule_retry(&mut self, now_ms: u64, attempt: u32) {
        self.next_attempt_ms = now_ms + u64::from(self.backoff_secs) * 1000;
        self.state = WifiState::Reconnecting { attempt };
    }

    fn on_connected(&mut self) {
        self.state = WifiState::Connected;
        self.backoff_secs = INITIAL_BACKOFF_SECS;
        self.last_rssi = self.platform_rssi();
    }

    // ── Platform-specific ─────────────────────────────────────

    #[cfg(target_os = "espidf")]
    fn platform_connect(&mut self) -> Result<(), ConnectivityError> {
        let auth_method = if self.password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };
        let config = Configuration::Client(ClientConfiguration {
            ssid: self.ssid.as_str().try_into().map_err(|_| ConnectivityError::InvalidSsid)?,
            password: self
                .password
                .as_str()
                .try_into()
                .map_err(|_| ConnectivityError::InvalidPassword)?,
            auth_method,
            ..Default::default()
        });

        let wifi = &mut self.driver;
        let result = (|| {
            wifi.set_configuration(&config)?;
            if !wifi.is_started()? {
                wifi.start()?;
            }
            wifi.connect()?;
            wifi.wait_netif_up()
        })();

        match result {
            Ok(()) => {
                if let Ok(ip) = wifi.wifi().sta_netif().get_ip_info() {
                    info!("WiFi: got IP {}", ip.ip);
                }
                Ok(())
            }
            Err(e) => {
                warn!("WiFi(espidf): {e}");
                Err(ConnectivityError::ConnectionFailed)
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_connect(&mut self) -> Result<(), ConnectivityError> {
        if self.sim_failures > 0 {
            self.sim_failures -= 1;
            warn!("WiFi(sim): simulated association failure");
            return Err(ConnectivityError::ConnectionFailed);
        }
        self.sim_link_up = true;
        info!("WiFi(sim): connected to '{}'", self.ssid);
        Ok(())
    }

    #[cfg(target_os = "espidf")]
    fn platform_is_connected(&self) -> bool {
        self.driver.is_connected().unwrap_or(false)
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_is_connected(&self) -> bool {
        self.sim_link_up
    }

    #[cfg(target_os = "espidf")]
    fn platform_rssi(&self) -> Option<i8> {
        let mut ap_info = esp_idf_svc::sys::wifi_ap_record_t::default();
        // SAFETY: `ap_info` is a valid, exclusively borrowed record.
        let rc = unsafe { esp_idf_svc::sys::esp_wifi_sta_get_ap_info(&mut ap_info) };
        (rc == esp_idf_svc::sys::ESP_OK as esp_idf_svc::sys::esp_err_t).then_some(ap_info.rssi)
    }

    #[cfg(not(target_os = "espidf"))]
    fn platform_rssi(&self) -> Option<i8> {
        self.sim_link_up.then_some(-60)
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for WifiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// ConnectivityPort
// ───────────────────────────────────────────────────────────────

impl ConnectivityPort for WifiAdapter {
    fn connect(&mut self, now_ms: u64) -> Result<(), ConnectivityError> {
        if self.ssid.is_empty() {
            return Err(ConnectivityError::NoCredentials);
        }
        if self.state == WifiState::Connected {
            return Err(ConnectivityError::AlreadyConnected);
        }

        info!("WiFi: connecting to '{}'", self.ssid);
        self.state = WifiState::Connecting;

        match self.platform_connect() {
            Ok(()) => {
                self.on_connected();
                info!("WiFi: connected (RSSI={:?})", self.last_rssi);
                Ok(())
            }
            Err(e) => {
                error!("WiFi: connection failed: {}", e);
                self.schedule_retry(now_ms, 0);
                Err(e)
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.state == WifiState::Connected && self.platform_is_connected()
    }

    fn poll(&mut self, now_ms: u64) {
        match self.state {
            WifiState::Reconnecting { attempt } if now_ms >= self.next_attempt_ms => {
                info!("WiFi: reconnect attempt {} (backoff {}s)", attempt + 1, self.backoff_secs);
                match self.platform_connect() {
                    Ok(()) => {
                        self.on_connected();
                        info!("WiFi: reconnected (RSSI={:?})", self.last_rssi);
                    }
                    Err(_) => {
                        self.backoff_secs = (self.backoff_secs * 2).min(MAX_BACKOFF_SECS);
                        self.schedule_retry(now_ms, attempt + 1);
                    }
                }
            }
            WifiState::Connected => {
                if self.platform_is_connected() {
                    self.last_rssi = self.platform_rssi();
                } else {
                    warn!("WiFi: connection lost, entering reconnect");
                    self.last_rssi = None;
                    self.schedule_retry(now_ms, 0);
                }
            }
            _ => {}
        }
    }

    fn set_credentials(&mut self, ssid: &str, password: &str) -> Result<(), ConnectivityError> {
        validate_ssid(ssid)?;
        validate_password(password)?;
        self.ssid.clear();
        self.ssid.push_str(ssid).map_err(|()| ConnectivityError::InvalidSsid)?;
        self.password.clear();
        self.password.push_str(password).map_err(|()| ConnectivityError::InvalidPassword)?;
        info!("WiFi: credentials set (SSID='{}')", self.ssid);
        Ok(())
    }

    fn rssi(&self) -> Option<i8> {
        self.last_rssi
    }
}

// ───────────────────────────────────────────────────────────────
// Supervisor thread
// ───────────────────────────────────────────────────────────────

/// Connect with the build-time credentials, then keep the link up on a
/// dedicated thread, publishing every status change to [`LINK_STATUS`].
pub fn spawn_supervisor(
    mut adapter: WifiAdapter,
    poll_interval_ms: u32,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("wifi".into())
        .stack_size(6 * 1024)
        .spawn(move || {
            match (BUILD_SSID, BUILD_PASSWORD) {
                (Some(ssid), password) => {
                    if let Err(e) = adapter.set_credentials(ssid, password.unwrap_or("")) {
                        error!("WiFi: build credentials rejected: {e}");
                        return;
                    }
                }
                (None, _) => {
                    error!("WiFi: {}; set RCCAR_WIFI_SSID at build time", ConnectivityError::NoCredentials);
                    return;
                }
            }

            let _ = adapter.connect(crate::adapters::time::uptime_ms());
            let mut last = adapter.link_status();
            LINK_STATUS.signal(last);

            loop {
                std::thread::sleep(std::time::Duration::from_millis(u64::from(poll_interval_ms)));
                adapter.poll(crate::adapters::time::uptime_ms());
                let status = adapter.link_status();
                if status.connected != last.connected {
                    LINK_STATUS.signal(status);
                }
                last = status;
            }
        })
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
