//! Error category classification for unified error handling.
//!
//! Categories pick the recovery hint shown with a failure and label it in logs.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection or timeout problems reaching the catalog.
    Network,

    /// The catalog answered, but with an error status or unusable data.
    Server,

    /// Filesystem and OS errors (preferences file, log file).
    System,

    /// Invalid or missing configuration (bad API URL, bad arguments).
    Configuration,
}

impl ErrorCategory {
    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the catalog server is reachable and reopen the screen",
            ErrorCategory::Server => "The catalog server returned bad data. Please try again later",
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => "Check --api-url, --data-dir and the BOSSDEX_* variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
