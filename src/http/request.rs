//! Request routing and validation.
//!
//! Turns a request URI into a typed [`Request`] before anything else
//! happens.  Validation failures are returned as [`HttpError`] and never
//! reach the dispatcher, so vehicle state stays untouched.

use core::fmt;

use crate::app::commands::AppCommand;
use crate::app::state::Gear;
use crate::error::ParamError;

use super::query::{self, ParamValue};

/// Routes served by the controller.
pub mod path {
    pub const ROOT: &str = "/";
    pub const SERVO: &str = "/api/servo";
    pub const MOSFET: &str = "/api/mosfet";
    pub const BRAKE: &str = "/api/brake";
    pub const HEADLIGHT: &str = "/api/headlight";
    pub const STOPLIGHT: &str = "/api/stoplight";
    pub const VERSION: &str = "/api/version";
    pub const GEAR: &str = "/api/gear";
    pub const GAS: &str = "/api/gas";
    pub const STOP: &str = "/api/stop";
    pub const STATE: &str = "/api/state";
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// The embedded control page.
    Page,
    Command(AppCommand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    NotFound,
    Param(ParamError),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Param(e) => write!(f, "{e}"),
        }
    }
}

impl From<ParamError> for HttpError {
    fn from(e: ParamError) -> Self {
        Self::Param(e)
    }
}

/// Route and validate a request URI.
pub fn parse(uri: &str, lenient: bool) -> Result<Request, HttpError> {
    let (path, q) = query::split_uri(uri);
    let command = match path {
        path::ROOT | "/index.html" => return Ok(Request::Page),
        path::SERVO => AppCommand::SetSteering(require_int(q, "angle", lenient)?),
        path::MOSFET => AppCommand::SetDrive(require_int(q, "duty", lenient)?),
        path::BRAKE => AppCommand::SetBrake(require_int(q, "state", lenient)? == 1),
        path::HEADLIGHT => AppCommand::ToggleHeadlight,
        path::STOPLIGHT => AppCommand::ToggleStopLight,
        path::VERSION => AppCommand::GetVersion,
        path::GEAR => AppCommand::SetGear(require_gear(q)?),
        path::GAS => AppCommand::SetGas(require_int(q, "value", lenient)?),
        path::STOP => AppCommand::EmergencyStop,
        path::STATE => AppCommand::GetState,
        _ => return Err(HttpError::NotFound),
    };
    Ok(Request::Command(command))
}

fn require_int(q: &str, name: &'static str, lenient: bool) -> Result<i32, ParamError> {
    match query::int_param(q, name, lenient) {
        ParamValue::Parsed(v) => Ok(v),
        ParamValue::Missing => Err(ParamError::Missing(name)),
        ParamValue::Invalid => Err(ParamError::Invalid(name)),
    }
}

fn require_gear(q: &str) -> Result<Gear, ParamError> {
    let raw = query::find(q, "value").ok_or(ParamError::Missing("value"))?;
    Gear::from_code(raw.trim()).ok_or(ParamError::Invalid("value"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(uri: &str) -> AppCommand {
        match parse(uri, false) {
            Ok(Request::Command(c)) => c,
            other => panic!("{uri}: {other:?}"),
        }
    }

    #[test]
    fn routes_every_endpoint() {
        assert_eq!(parse("/", false), Ok(Request::Page));
        assert_eq!(cmd("/api/servo?angle=90"), AppCommand::SetSteering(90));
        assert_eq!(cmd("/api/mosfet?duty=-50"), AppCommand::SetDrive(-50));
        assert_eq!(cmd("/api/brake?state=1"), AppCommand::SetBrake(true));
        assert_eq!(cmd("/api/headlight"), AppCommand::ToggleHeadlight);
        assert_eq!(cmd("/api/stoplight"), AppCommand::ToggleStopLight);
        assert_eq!(cmd("/api/version"), AppCommand::GetVersion);
        assert_eq!(cmd("/api/gear?value=R"), AppCommand::SetGear(Gear::Reverse));
        assert_eq!(cmd("/api/gas?value=40"), AppCommand::SetGas(40));
        assert_eq!(cmd("/api/stop"), AppCommand::EmergencyStop);
        assert_eq!(cmd("/api/state"), AppCommand::GetState);
    }

    #[test]
    fn brake_is_active_only_for_one() {
        assert_eq!(cmd("/api/brake?state=0"), AppCommand::SetBrake(false));
        assert_eq!(cmd("/api/brake?state=2"), AppCommand::SetBrake(false));
        assert_eq!(cmd("/api/brake?state=-1"), AppCommand::SetBrake(false));
    }

    #[test]
    fn missing_parameters_are_rejected() {
        assert_eq!(
            parse("/api/servo", false),
            Err(HttpError::Param(ParamError::Missing("angle")))
        );
        assert_eq!(
            parse("/api/mosfet?speed=3", false),
            Err(HttpError::Param(ParamError::Missing("duty")))
        );
        assert_eq!(
            parse("/api/brake", true),
            Err(HttpError::Param(ParamError::Missing("state")))
        );
        assert_eq!(
            parse("/api/gear", false),
            Err(HttpError::Param(ParamError::Missing("value")))
        );
    }

    #[test]
    fn malformed_parameters_depend_on_policy() {
        assert_eq!(
            parse("/api/servo?angle=left", false),
            Err(HttpError::Param(ParamError::Invalid("angle")))
        );
        assert_eq!(
            parse("/api/servo?angle=left", true),
            Ok(Request::Command(AppCommand::SetSteering(0)))
        );
        assert_eq!(
            parse("/api/gear?value=P", true),
            Err(HttpError::Param(ParamError::Invalid("value")))
        );
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(parse("/api/turbo", false), Err(HttpError::NotFound));
        assert_eq!(HttpError::NotFound.to_string(), "not found");
    }
}
