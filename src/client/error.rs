//! Error type shared by every Mealie API call.
//!
//! All failure paths end up in a single [`ApiError`]. The variant tells you what
//! went wrong (no response at all, a non-success status, or a body we could not
//! decode), and the accessors expose the same field set regardless of variant so
//! callers can branch on `http_status()` without matching.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Message used when a transport failure carries no description of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body attached to a failed response, parsed as JSON when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parses `text` as JSON, keeping the raw text when it is not valid JSON.
    ///
    /// Returns `None` for an empty body.
    pub fn from_text(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(match serde_json::from_str(text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text.to_string()),
        })
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text.as_str()),
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Errors returned by the Mealie client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (DNS, connection refused, TLS, timeout, ...).
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// The server answered with a status outside the success range.
    #[error("HTTP {status}: {status_text}")]
    Http {
        status: u16,
        status_text: String,
        body: Option<ResponseBody>,
    },

    /// A success response whose body is not the JSON shape we expected.
    #[error("failed to decode response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request was rejected before any I/O took place.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Wraps a transport-level failure message.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Transport {
            message: if message.trim().is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            source: None,
        }
    }

    /// Wraps an underlying I/O error, keeping it as the error source.
    pub fn transport_from<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = error.to_string();
        Self::Transport {
            message: if message.trim().is_empty() {
                UNKNOWN_ERROR_MESSAGE.to_string()
            } else {
                message
            },
            source: Some(Box::new(error)),
        }
    }

    /// Builds the error for a non-success response from its raw body text.
    pub fn http(status: u16, status_text: impl Into<String>, body_text: &str) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
            body: ResponseBody::from_text(body_text),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Status code of the response, absent for transport and local failures.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn http_status_text(&self) -> Option<&str> {
        match self {
            Self::Http { status_text, .. } => Some(status_text.as_str()),
            _ => None,
        }
    }

    /// Parsed or raw body of a failed response.
    pub fn response(&self) -> Option<&ResponseBody> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
