//! System-related error types.
//!
//! Filesystem failures: the preferences file, the data directory and the
//! log file.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// File not found.
    FileNotFound { path: PathBuf },

    /// Permission denied for file/directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Failed to create directory.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Insufficient disk space.
    InsufficientDiskSpace { path: PathBuf },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// Could not determine home directory.
    NoHomeDirectory,

}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!(
                    "Permission denied: Cannot {} '{}'.\nCheck the permissions of the bossdex data directory.",
                    operation,
                    path.display()
                )
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!(
                    "Failed to create directory: '{}'.\nPlease check permissions and try again.",
                    path.display()
                )
            }
            SystemError::InsufficientDiskSpace { path } => {
                format!(
                    "Not enough disk space at '{}'.\nPlease free up some disk space and try again.",
                    path.display()
                )
            }
            SystemError::IoError { operation, path, .. } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::NoHomeDirectory => {
                "Could not determine your home directory. Set BOSSDEX_HOME or pass --data-dir."
                    .to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::InsufficientDiskSpace { .. } => "E_SYS_DISK_SPACE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::NoHomeDirectory => "E_SYS_NO_HOME",
        }
    }

    /// True for errors that stem from configuration rather than the OS.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SystemError::NoHomeDirectory)
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::FileNotFound { path } => {
                write!(f, "File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(
                    f,
                    "Failed to create directory '{}': {}",
                    path.display(),
                    message
                )
            }
            SystemError::InsufficientDiskSpace { path } => {
                write!(f, "Insufficient disk space at '{}'", path.display())
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(
                    f,
                    "I/O error during {} at '{}': {}",
                    operation,
                    p.display(),
                    message
                ),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::NoHomeDirectory => {
                write!(f, "Could not determine home directory")
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(p)) => SystemError::FileNotFound { path: p },
        (ErrorKind::PermissionDenied, Some(p)) => SystemError::PermissionDenied {
            path: p,
            operation: operation.to_string(),
        },
        (_, Some(p)) if is_disk_space_error(&err) => SystemError::InsufficientDiskSpace { path: p },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}

/// Check if an I/O error is a disk space error.
fn is_disk_space_error(err: &std::io::Error) -> bool {
    #[cfg(unix)]
    {
        // ENOSPC
        err.raw_os_error() == Some(28)
    }
    #[cfg(not(unix))]
    {
        let msg = err.to_string().to_lowercase();
        msg.contains("no space") || msg.contains("disk full")
    }
}
