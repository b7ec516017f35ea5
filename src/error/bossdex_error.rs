//! Unified error type for bossdex.
//!
//! `BossdexError` gathers the domain errors of the catalog client, the
//! preference store and the OS layer behind one categorised type.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::network::NetworkError;
use super::system::SystemError;
use crate::catalog::CatalogError;
use crate::preferences::PreferencesError;
use crate::traits::HttpError;

/// Unified error type for bossdex.
#[derive(Debug)]
pub enum BossdexError {
    /// Transport failures talking to the catalog source.
    Network(NetworkError),

    /// The catalog answered with a body that cannot be used.
    Catalog(CatalogError),

    /// Reading or writing the preferences file failed.
    Preferences(PreferencesError),

    /// System/filesystem errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<BossdexError>,
        context: ErrorContext,
    },
}

impl BossdexError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BossdexError::Network(err) => {
                if err.is_server_side() {
                    ErrorCategory::Server
                } else if matches!(err, NetworkError::InvalidUrl { .. }) {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::Network
                }
            }
            BossdexError::Catalog(_) => ErrorCategory::Server,
            BossdexError::Preferences(err) => {
                if err.is_configuration() {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::System
                }
            }
            BossdexError::System(err) => {
                if err.is_configuration() {
                    ErrorCategory::Configuration
                } else {
                    ErrorCategory::System
                }
            }
            BossdexError::WithContext { error, .. } => error.category(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            BossdexError::Network(err) => err.user_message(),
            BossdexError::Catalog(err) => format!("The catalog sent unusable data: {}", err),
            BossdexError::Preferences(err) => format!("Preferences were not saved: {}", err),
            BossdexError::System(err) => err.user_message(),
            BossdexError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BossdexError::Network(err) => err.error_code(),
            BossdexError::Catalog(err) => err.error_code(),
            BossdexError::Preferences(err) => err.error_code(),
            BossdexError::System(err) => err.error_code(),
            BossdexError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        BossdexError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            BossdexError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &BossdexError {
        match self {
            BossdexError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for BossdexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BossdexError::Network(err) => write!(f, "{}", err),
            BossdexError::Catalog(err) => write!(f, "{}", err),
            BossdexError::Preferences(err) => write!(f, "{}", err),
            BossdexError::System(err) => write!(f, "{}", err),
            BossdexError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for BossdexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BossdexError::Network(err) => Some(err),
            BossdexError::Catalog(err) => Some(err),
            BossdexError::Preferences(err) => Some(err),
            BossdexError::System(err) => Some(err),
            BossdexError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for BossdexError {
    fn from(err: NetworkError) -> Self {
        BossdexError::Network(err)
    }
}

impl From<CatalogError> for BossdexError {
    fn from(err: CatalogError) -> Self {
        BossdexError::Catalog(err)
    }
}

impl From<PreferencesError> for BossdexError {
    fn from(err: PreferencesError) -> Self {
        BossdexError::Preferences(err)
    }
}

impl From<SystemError> for BossdexError {
    fn from(err: SystemError) -> Self {
        BossdexError::System(err)
    }
}

// ============================================================================
// From implementations for external error types
// ============================================================================

impl From<std::io::Error> for BossdexError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        BossdexError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for BossdexError {
    fn from(err: serde_json::Error) -> Self {
        BossdexError::Catalog(CatalogError::InvalidBody {
            message: err.to_string(),
        })
    }
}

impl From<HttpError> for BossdexError {
    fn from(err: HttpError) -> Self {
        BossdexError::Network(super::network::classify_http_error(err, "unknown"))
    }
}
