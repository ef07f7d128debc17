//! Error types for the author profile service.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Upstream bodies are cut to this many characters before being surfaced.
pub const UPSTREAM_MESSAGE_LIMIT: usize = 200;

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Any non-200 response from OpenAlex.
    #[error("OpenAlex error: {status} {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, truncated to [`UPSTREAM_MESSAGE_LIMIT`] characters
        message: String,
    },
}

impl ClientError {
    /// Create a status error, truncating the upstream body.
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status { status, message: truncate_message(body, UPSTREAM_MESSAGE_LIMIT) }
    }

    /// Upstream HTTP status, when the failure came from a response.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the call never produced a response in time.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Errors surfaced by the analysis service.
#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    /// OpenAlex was unreachable or answered with a non-success status.
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl ProfileError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Returns true for upstream failures.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }

    /// Convert to a user-friendly error message.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Upstream(ClientError::Status { status, message }) => {
                format!("OpenAlex error: {status} {message}")
            }
            Self::Upstream(ClientError::Timeout(after)) => {
                format!("OpenAlex did not answer within {after:?}")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Keep at most `limit` characters of `text`.
#[must_use]
pub fn truncate_message(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for service operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
