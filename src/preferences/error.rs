//! Errors raised while reading or writing the preferences snapshot.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for preference persistence.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The preferences file exists but could not be read
    #[error("Failed to read preferences from '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file or its directory could not be written
    #[error("Failed to write preferences to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file is not a valid snapshot
    #[error("Preferences file '{}' is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No data directory could be derived from the environment
    #[error("Could not determine home directory for preferences")]
    NoHomeDirectory,

    /// Backend refused the operation
    #[error("Preferences backend unavailable: {message}")]
    Unavailable { message: String },
}

impl PreferencesError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PreferencesError::Read { .. } => "E_PREF_READ",
            PreferencesError::Write { .. } => "E_PREF_WRITE",
            PreferencesError::Malformed { .. } => "E_PREF_MALFORMED",
            PreferencesError::NoHomeDirectory => "E_PREF_NO_HOME",
            PreferencesError::Unavailable { .. } => "E_PREF_UNAVAILABLE",
        }
    }

    /// True when the failure comes from configuration rather than I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, PreferencesError::NoHomeDirectory)
    }
}
