//! Error type shared by every AgentMail operation.

use reqwest::StatusCode;

/// Errors returned by the AgentMail client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable credential or client setting could be resolved.
    ///
    /// Raised before any network request is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller supplied a structurally invalid request.
    ///
    /// Raised before dispatch; no request reaches the network.
    #[error("invalid `{field}`: {reason}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("AgentMail API error ({status}): {message}")]
    Api {
        /// HTTP status returned by the service.
        status: StatusCode,
        /// Error name from the response body, e.g. `NotFoundError`.
        name: Option<String>,
        /// Error message from the response body, or the raw body text.
        message: String,
    },

    /// A request or response body could not be (de)serialized.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn validation(field: &'static str, reason: &'static str) -> Self {
        Error::Validation { field, reason }
    }

    /// HTTP status of an [`Error::Api`] response, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Request(err) => err.status(),
            _ => None,
        }
    }

    /// `true` when the service reported that the addressed resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Api { status, name, .. } => {
                *status == StatusCode::NOT_FOUND || name.as_deref() == Some("NotFoundError")
            }
            _ => false,
        }
    }

    /// `true` when the service refused the request because an account limit was hit.
    pub fn is_limit_exceeded(&self) -> bool {
        match self {
            Error::Api { status, name, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS
                    || name.as_deref() == Some("LimitExceededError")
            }
            _ => false,
        }
    }
}
