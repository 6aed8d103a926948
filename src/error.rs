//! Error taxonomy shared by the HTTP wrapper, API functions, and flows.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries a human-readable message through `Display`, so views
//! can show `err.to_string()` directly. Auth failures (401/403) are reported
//! like any other status; the forced logout already happened in the wrapper.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response as re-raised by the HTTP wrapper.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// Non-2xx response after message extraction.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Login answered 2xx but carried no token.
    #[error("missing token in login response")]
    MissingToken,

    /// Response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status attached to the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses, which force a logout.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Turn a raw status error into a `Server` error carrying the body's
    /// `message` field, or `default_message` when the body has none.
    /// Other variants pass through unchanged.
    #[must_use]
    pub fn normalize(self, default_message: &str) -> Self {
        match self {
            Self::Status { status, body } => Self::Server {
                status,
                message: server_message(&body).unwrap_or_else(|| default_message.to_owned()),
            },
            other => other,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extract a non-empty `message` from a JSON error body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
