//! Client-side error taxonomy.

use thiserror::Error;

/// Result type used across the client.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error raised by a client operation.
///
/// Keep this focused on the three failure classes a user action can hit:
/// bad input (caught before any network call), transport failure, and a
/// non-2xx backend response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// User input failed validation; no network call was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Transport-level failure (DNS, refused connection, dropped socket).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` carries the backend's error body message
    /// when one could be parsed.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Http { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::Http { status, message }
    }

    /// Message to surface to the user for this failure.
    ///
    /// Backend-provided messages are shown verbatim; transport failures and
    /// message-less responses degrade to the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Http {
                message: Some(msg), ..
            } => msg.clone(),
            Self::Http { message: None, .. } | Self::Network(_) => fallback.to_string(),
        }
    }
}
