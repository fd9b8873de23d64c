//! HTTP transport boundary.
//!
//! ```text
//!  URI ──▶ request::parse ──▶ CommandBridge ──▶ Dispatcher
//!                │                  │
//!                ▼                  ▼
//!          HttpError (400/404)   CommandReply ──▶ HttpResponse
//! ```
//!
//! Parsing and rendering are pure and host-testable; only
//! `server` (target only) touches ESP-IDF.

pub mod channels;
pub mod page;
pub mod query;
pub mod request;
pub mod response;
#[cfg(target_os = "espidf")]
pub mod server;

use log::{debug, warn};

use crate::error::Error;
use channels::CommandBridge;
use request::{HttpError, Request};
use response::HttpResponse;

/// Answer one GET request.
///
/// Invalid requests are answered here without involving the control loop;
/// valid commands go through `bridge` and block until dispatched.
pub fn respond(uri: &str, lenient: bool, bridge: &CommandBridge) -> HttpResponse {
    match request::parse(uri, lenient) {
        Ok(Request::Page) => HttpResponse::page(),
        Ok(Request::Command(cmd)) => match bridge.submit(cmd) {
            Ok(reply) => HttpResponse::from_reply(&reply),
            Err(e) => {
                warn!("HTTP: {uri}: {}", Error::from(e));
                HttpResponse::unavailable(e)
            }
        },
        Err(HttpError::Param(e)) => {
            debug!("HTTP: {uri}: {}", Error::from(e));
            HttpResponse::from_error(HttpError::Param(e))
        }
        Err(e) => HttpResponse::from_error(e),
    }
}
