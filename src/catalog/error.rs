//! Errors raised while decoding catalog responses.

use thiserror::Error;

/// Error type for catalog bodies that cannot be used.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint answered with something other than a JSON array
    #[error("Expected a JSON array from {endpoint}")]
    NotAnArray { endpoint: String },

    /// The body is not valid JSON
    #[error("Catalog body is not valid JSON: {message}")]
    InvalidBody { message: String },

    /// A single element was rejected; the rest of the list is still used
    #[error("Invalid {kind} record at index {index}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        index: usize,
        reason: String,
    },
}

impl CatalogError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::NotAnArray { .. } => "E_CAT_NOT_ARRAY",
            CatalogError::InvalidBody { .. } => "E_CAT_BODY",
            CatalogError::InvalidRecord { .. } => "E_CAT_RECORD",
        }
    }
}
