//! ESP-IDF httpd binding.
//!
//! One wildcard GET handler forwards every URI to [`super::respond`]; all
//! routing and rendering stays in the host-testable modules.

use anyhow::Result;
use esp_idf_svc::http::Method;
use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use esp_idf_svc::io::Write;
use log::{debug, info};

use crate::config::SystemConfig;

use super::channels::BRIDGE;

/// Start the server.  The returned handle must stay alive; dropping it
/// stops httpd.
pub fn start(config: &SystemConfig) -> Result<EspHttpServer<'static>> {
    let mut server = EspHttpServer::new(&Configuration {
        http_port: config.http_port,
        uri_match_wildcard: true,
        ..Default::default()
    })?;

    let lenient = config.lenient_params;
    server.fn_handler::<anyhow::Error, _>("/*", Method::Get, move |req| {
        let response = super::respond(req.uri(), lenient, &BRIDGE);
        debug!("HTTP: GET {} -> {}", req.uri(), response.status);
        let mut resp = req.into_response(
            response.status,
            None,
            &[("Content-Type", response.content_type)],
        )?;
        resp.write_all(response.body.as_bytes())?;
        Ok(())
    })?;

    info!("HTTP: listening on port {}", config.http_port);
    Ok(server)
}
