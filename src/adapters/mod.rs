//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements         | Connects to                 |
//! |-------------|--------------------|-----------------------------|
//! | `hardware`  | ActuatorPort       | LEDC PWM, GPIO (embedded-hal)|
//! | `log_sink`  | EventSink          | Serial log output           |
//! | `wifi`      | ConnectivityPort   | ESP-IDF WiFi STA            |
//! | `mdns`      | —                  | ESP-IDF mDNS responder      |
//! | `device_id` | —                  | eFuse MAC                   |
//! | `time`      | —                  | ESP32 system timer          |
//! | `ota`       | —                  | OTA partition state         |

pub mod device_id;
pub mod hardware;
pub mod log_sink;
pub mod mdns;
pub mod ota;
pub mod time;
pub mod wifi;
