//! Startup configuration types.
//!
//! Values are layered: built-in defaults, then `BOSSDEX_*` environment
//! variables, then command-line flags.

use std::path::PathBuf;

use crate::cli::CliOptions;
use crate::error::SystemError;

/// Catalog server used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Name of the data directory under the user's home.
pub const DEFAULT_DATA_DIR_NAME: &str = ".bossdex";

/// Environment variable overriding the catalog server URL.
pub const ENV_API_URL: &str = "BOSSDEX_API_URL";

/// Environment variable overriding the data directory.
pub const ENV_HOME: &str = "BOSSDEX_HOME";

/// Environment variable holding the tracing filter.
pub const ENV_LOG: &str = "BOSSDEX_LOG";

/// Configuration for startup.
///
/// # Example
///
/// ```ignore
/// use bossdex::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_api_url("http://192.168.1.20:3000")
///     .with_data_dir("/tmp/bossdex");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Base URL of the catalog server (default: http://localhost:3000)
    pub api_url: String,
    /// Directory for preferences and the log file (default: ~/.bossdex)
    pub data_dir: Option<PathBuf>,
    /// Tracing filter directive, e.g. `bossdex=debug`
    pub log_filter: Option<String>,
    /// Per-request timeout for catalog fetches
    pub request_timeout_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            log_filter: None,
            request_timeout_secs: super::DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog server URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Set the tracing filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Create config from `BOSSDEX_API_URL`, `BOSSDEX_HOME` and `BOSSDEX_LOG`.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(ENV_API_URL) {
            config = config.with_api_url(url);
        }
        if let Some(dir) = non_empty_var(ENV_HOME) {
            config = config.with_data_dir(dir);
        }
        if let Some(filter) = non_empty_var(ENV_LOG) {
            config = config.with_log_filter(filter);
        }

        config
    }

    /// Layer command-line flags over this config.
    pub fn apply_options(mut self, options: &CliOptions) -> Self {
        if let Some(url) = &options.api_url {
            self.api_url = url.clone();
        }
        if let Some(dir) = &options.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if let Some(filter) = &options.log_filter {
            self.log_filter = Some(filter.clone());
        }
        self
    }

    /// The configured data directory, or `~/.bossdex`.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, SystemError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
            .ok_or(SystemError::NoHomeDirectory)
    }

    /// The tracing filter to install, `info` when none is configured.
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
