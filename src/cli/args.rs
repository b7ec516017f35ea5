//! Command-line argument parsing for bossdex.
//!
//! Flags select a command (`--version`, `--help`, `--list`, or the TUI) and
//! carry options that override the environment-derived configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the catalog grouped by isle and exit
    List,
    /// Run the TUI application (default)
    RunTui,
}

/// Options that override environment configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub api_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_filter: Option<String>,
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    pub command: CliCommand,
    pub options: CliOptions,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: String },
    #[error("unknown argument '{0}'")]
    Unknown(String),
}

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: bossdex [OPTIONS]

Options:
      --api-url <URL>       Catalog server (env BOSSDEX_API_URL, default http://localhost:3000)
      --data-dir <PATH>     Preferences and log directory (env BOSSDEX_HOME, default ~/.bossdex)
      --log-level <FILTER>  Tracing filter (env BOSSDEX_LOG, default info)
      --list                Print the catalog grouped by isle and exit
  -V, --version             Print version
  -h, --help                Print help";

/// Parse command-line arguments.
///
/// `--version` and `--help` win over every other flag. Values may be given
/// as `--flag value` or `--flag=value`.
///
/// # Examples
///
/// ```
/// use bossdex::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["bossdex".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<ParsedArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut command = CliCommand::RunTui;
    let mut options = CliOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => {
                return Ok(ParsedArgs {
                    command: CliCommand::Version,
                    options,
                })
            }
            "--help" | "-h" => {
                return Ok(ParsedArgs {
                    command: CliCommand::Help,
                    options,
                })
            }
            "--list" => command = CliCommand::List,
            "--api-url" => options.api_url = Some(take_value(&flag, inline, &mut args)?),
            "--data-dir" => {
                options.data_dir = Some(PathBuf::from(take_value(&flag, inline, &mut args)?))
            }
            "--log-level" => options.log_filter = Some(take_value(&flag, inline, &mut args)?),
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }

    Ok(ParsedArgs { command, options })
}

fn take_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .filter(|v| !v.is_empty() && !v.starts_with("--"))
        .ok_or_else(|| ArgsError::MissingValue {
            flag: flag.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParsedArgs, ArgsError> {
        let mut all = vec!["bossdex".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse(&[]).unwrap();
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert_eq!(parsed.options, CliOptions::default());
    }

    #[test]
    fn test_parse_list_with_options() {
        let parsed = parse(&["--list", "--api-url", "http://h:1", "--data-dir=/tmp/b"]).unwrap();
        assert_eq!(parsed.command, CliCommand::List);
        assert_eq!(parsed.options.api_url.as_deref(), Some("http://h:1"));
        assert_eq!(parsed.options.data_dir, Some(PathBuf::from("/tmp/b")));
    }

    #[test]
    fn test_parse_log_level() {
        let parsed = parse(&["--log-level", "bossdex=trace"]).unwrap();
        assert_eq!(parsed.options.log_filter.as_deref(), Some("bossdex=trace"));
    }

    #[test]
    fn test_version_wins_over_later_errors() {
        assert_eq!(
            parse(&["--version", "--bogus"]).unwrap().command,
            CliCommand::Version
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--api-url"]).unwrap_err(),
            ArgsError::MissingValue {
                flag: "--api-url".to_string()
            }
        );
        assert!(parse(&["--api-url", "--list"]).is_err());
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]).unwrap_err(),
            ArgsError::Unknown("--unknown".to_string())
        );
    }
}
