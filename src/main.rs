//! RC Car Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single-owner control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter   LogEventSink   WifiAdapter   MdnsAdapter    │
//! │  (ActuatorPort)    (EventSink)    (own thread)  (hostname)     │
//! │  EspHttpServer ──▶ CommandBridge                               │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Dispatcher (pure logic)                   │    │
//! │  │  VehicleState · Brake precedence · Deadman             │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::Duration;

use anyhow::Result;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, EspWifi};
use log::{error, info, warn};

use rccar::adapters::log_sink::LogEventSink;
use rccar::adapters::mdns::MdnsAdapter;
use rccar::adapters::wifi::{LINK_STATUS, WifiAdapter};
use rccar::adapters::{device_id, ota, time, wifi};
use rccar::app::dispatcher::{Dispatcher, VERSION_STRING};
use rccar::config::SystemConfig;
use rccar::drivers::hw_init;
use rccar::drivers::watchdog::Watchdog;
use rccar::http;
use rccar::http::channels::BRIDGE;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RC Car {:<29}║", VERSION_STRING);
    info!("╚══════════════════════════════════════╝");

    let config = SystemConfig::default();
    let peripherals = Peripherals::take()?;

    // ── 2. Actuators to a safe state ──────────────────────────
    let mut hw = hw_init::init_hardware(peripherals.ledc, &config).map_err(|e| {
        error!("hw_init: {e}");
        rccar::error::Error::from(e)
    })?;
    let mut sink = LogEventSink::new();
    let mut dispatcher = Dispatcher::new(&config);
    dispatcher.start(time::uptime_ms(), &mut hw, &mut sink);

    // Outputs are up: this image is good enough to keep.
    ota::check_rollback();

    // ── 3. Network ────────────────────────────────────────────
    let mac = device_id::read_mac();
    let hostname = device_id::hostname(&config.hostname_prefix, &mac);
    info!("Hostname: {}", hostname);

    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let driver = BlockingWifi::wrap(
        EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs))?,
        sysloop,
    )?;
    let _wifi_thread = wifi::spawn_supervisor(WifiAdapter::new(driver), config.wifi_poll_interval_ms)?;

    let _server = http::server::start(&config)?;
    let mut mdns = MdnsAdapter::new(hostname, config.http_port);

    // ── 4. Control loop ───────────────────────────────────────
    let watchdog = Watchdog::default();
    let tick = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    info!("System ready. Entering control loop.");

    loop {
        let now = time::uptime_ms();
        BRIDGE.serve_pending(&mut dispatcher, now, &mut hw, &mut sink);

        if let Some(link) = LINK_STATUS.try_take() {
            if link.connected {
                match link.rssi {
                    Some(rssi) => info!("WiFi: link up, RSSI {} dBm", rssi),
                    None => info!("WiFi: link up"),
                }
                mdns.start();
            } else {
                warn!("WiFi: link lost, commands unavailable until reconnect");
                mdns.stop();
            }
        }

        dispatcher.tick(now, &mut hw, &mut sink);
        watchdog.feed();
        std::thread::sleep(tick);
    }
}
