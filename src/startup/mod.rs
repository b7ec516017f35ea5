//! Startup wiring with dependency injection.
//!
//! Startup is split out of `main()` so each step can be tested on its own:
//!
//! - [`config`] - configuration resolved from defaults, environment and flags
//! - [`prepare`] - builds the catalog client and restores preferences
//!
//! # Usage
//!
//! ```ignore
//! use bossdex::startup::{prepare, StartupConfig};
//!
//! let config = StartupConfig::from_env().apply_options(&options);
//! let prepared = prepare(&config)?;
//! // prepared.catalog and prepared.preferences are ready for the TUI
//! ```

pub mod config;
pub mod prepare;

pub use config::{StartupConfig, DEFAULT_API_URL, DEFAULT_DATA_DIR_NAME};
pub use prepare::{prepare, prepare_with, Prepared};

/// Seconds before a catalog request is abandoned.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
