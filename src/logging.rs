//! Tracing setup for TUI mode.
//!
//! The terminal belongs to ratatui while the app runs, so all output goes to
//! `<data dir>/bossdex.log` and nothing is written to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{classify_io_error, SystemError};

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "bossdex.log";

/// Build an `EnvFilter` from `directive`, falling back to `info` when it does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, appending to `bossdex.log` in `data_dir`.
///
/// Returns the log file path. Calling this twice keeps the first subscriber.
pub fn init_tui(data_dir: &Path, directive: &str) -> Result<PathBuf, SystemError> {
    fs::create_dir_all(data_dir)
        .map_err(|e| classify_io_error(e, Some(data_dir.to_path_buf()), "create data directory"))?;

    let path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| classify_io_error(e, Some(path.clone()), "open log file"))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(build_filter(directive));

    // No stdout layer: TUI owns the terminal
    let _ = tracing_subscriber::registry().with(file_layer).try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        let filter = build_filter("bossdex=debug,warn");
        assert!(filter.to_string().contains("bossdex=debug"));
    }

    #[test]
    fn test_build_filter_default_level() {
        assert_eq!(build_filter("info").to_string(), "info");
    }

    #[test]
    fn test_init_tui_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data");

        let path = init_tui(&nested, "debug").unwrap();

        assert_eq!(path, nested.join(LOG_FILE));
        assert!(path.exists());
    }
}
