//! Typed failure taxonomy for every API helper.
//!
//! ERROR HANDLING
//! ==============
//! The REST API reports failures as `{ "msg": "..." }` bodies (occasionally
//! `message`). That shape is read exactly once, here, so views only ever see
//! an [`ApiError`] with a display-ready message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure returned by API helpers and client-side validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected before any network call (e.g. password mismatch).
    #[error("{0}")]
    Validation(String),
    /// Missing, empty, or expired bearer token.
    #[error("{0}")]
    Unauthorized(String),
    /// The session's role lacks the capability for this call.
    #[error("{0}")]
    Forbidden(String),
    /// Lookup produced no result (geocoding miss, unknown donation).
    #[error("{0}")]
    NotFound(String),
    /// The server answered with a failure body.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request could not complete.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// Normalize a non-2xx HTTP response.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| request_failed_message(status));
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Server { status, message },
        }
    }

    /// Wrap a transport or decode failure.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Display-ready message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Network(m)
            | Self::Server { message: m, .. } => m,
        }
    }

    /// The message, or `fallback` when the server gave nothing specific.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Server { status, message } if *message == request_failed_message(*status) => fallback,
            Self::Network(_) => fallback,
            _ => self.message(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers `msg`, then `message`, from a JSON object; a non-JSON body is used
/// verbatim unless it is markup (a proxy error page). Returns `None` for empty
/// bodies, markup, and JSON without either field.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) => ["msg", "message"]
            .iter()
            .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .find(|m| !m.is_empty())
            .map(str::to_owned),
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}
