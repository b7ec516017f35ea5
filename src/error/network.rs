//! Network-related error types.
//!
//! Errors that occur while talking to the catalog source.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String, duration_secs: u64 },

    /// Non-2xx response.
    HttpStatus { status: u16, message: String },

    /// The configured URL is not usable.
    InvalidUrl { url: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// True when the server answered but the answer was unusable.
    pub fn is_server_side(&self) -> bool {
        matches!(self, NetworkError::HttpStatus { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the catalog at '{}'.", url)
            }
            NetworkError::Timeout { operation, duration_secs } => {
                format!(
                    "The {} request timed out after {} seconds.",
                    operation, duration_secs
                )
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The catalog endpoint was not found.".to_string(),
                500..=599 => "The catalog server is experiencing issues.".to_string(),
                _ => format!("The catalog returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidUrl { url } => format!("'{}' is not a valid catalog URL.", url),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { operation, duration_secs } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Map the transport-level [`HttpError`] of the client trait onto a NetworkError.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(_) => NetworkError::Timeout {
            operation: "catalog request".to_string(),
            duration_secs: crate::startup::DEFAULT_REQUEST_TIMEOUT_SECS,
        },
        HttpError::ServerError { status, message } => NetworkError::HttpStatus { status, message },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl { url: url.to_string() },
        HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
    }
}
