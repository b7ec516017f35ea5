//! CLI module for bossdex.
//!
//! Handles the flags that run instead of the TUI: version, help and the
//! plain-text catalog listing.
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use bossdex::cli::{parse_args, run_cli_command};
//!
//! let parsed = parse_args(std::env::args())?;
//! let config = StartupConfig::from_env().apply_options(&parsed.options);
//! if let Some(result) = run_cli_command(&parsed.command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod list;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOptions, ParsedArgs, USAGE};
pub use list::{format_catalog, handle_list_command};
pub use version::{handle_version_command, version_line, VERSION};

use color_eyre::Result;

use crate::startup::StartupConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, config: &StartupConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::List => Some(handle_list_command(config)),
        CliCommand::RunTui => None,
    }
}
