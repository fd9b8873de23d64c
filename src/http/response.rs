//! Response rendering.

use std::borrow::Cow;

use log::error;

use crate::app::commands::CommandReply;
use crate::error::CommsError;

use super::page::CONTROL_PAGE;
use super::request::HttpError;

pub const TEXT_PLAIN: &str = "text/plain";
pub const TEXT_HTML: &str = "text/html";
pub const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Cow<'static, str>,
}

impl HttpResponse {
    pub fn text(status: u16, body: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    pub fn page() -> Self {
        Self {
            status: 200,
            content_type: TEXT_HTML,
            body: Cow::Borrowed(CONTROL_PAGE),
        }
    }

    pub fn from_reply(reply: &CommandReply) -> Self {
        match reply {
            CommandReply::Version(v) => Self::text(200, *v),
            CommandReply::State(snapshot) => match serde_json::to_string(snapshot) {
                Ok(json) => Self {
                    status: 200,
                    content_type: APPLICATION_JSON,
                    body: Cow::Owned(json),
                },
                Err(e) => {
                    error!("HTTP: state serialisation failed: {e}");
                    Self::text(500, "internal error")
                }
            },
            other => Self::text(200, other.to_string()),
        }
    }

    pub fn from_error(err: HttpError) -> Self {
        let status = match err {
            HttpError::NotFound => 404,
            HttpError::Param(_) => 400,
        };
        Self::text(status, err.to_string())
    }

    /// The control loop could not take the command.
    pub fn unavailable(err: CommsError) -> Self {
        Self::text(503, err.to_string())
    }
}
