// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! QRZ CLI - callsign, biography and DXCC lookups against QRZ.com.
//!
//! # Examples
//!
//! ```bash
//! # Look up two callsigns
//! qrz W1AW W5YI
//!
//! # CSV output
//! qrz --format csv W1AW
//!
//! # DXCC entity by number or prefix
//! qrz --action dxcc 291 VE
//!
//! # Raw biography HTML
//! qrz -a bio W1AW > w1aw.html
//!
//! # Where is the config file?
//! qrz --config-path
//! ```

mod controller;
mod credentials;
mod output;
mod progress;
mod prompt;

use clap::Parser;
use qrz_core::LookupAction;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use output::OutputFormat;

// ============================================================================
// CLI Definition
// ============================================================================

/// QRZ CLI - look up amateur radio callsigns on QRZ.com.
#[derive(Parser)]
#[command(name = "qrz")]
#[command(about = "Look up callsigns, biographies and DXCC entities on QRZ.com")]
#[command(long_about = r#"
Looks up callsign records, biographies or DXCC entities through the QRZ.com
XML data service. A QRZ XML subscription is required.

Your callsign and password are asked for on first use and stored in the
config file (see --config-path); the password is stored encrypted.

Examples:
  qrz W1AW W5YI                  # Callsign records
  qrz -f csv W1AW                # CSV output
  qrz -a dxcc 291                # DXCC entity
  qrz -a bio W1AW                # Raw biography HTML
"#)]
#[command(version)]
pub struct Cli {
    /// Callsigns (or DXCC numbers/prefixes) to look up.
    #[arg(required_unless_present = "config_path")]
    pub terms: Vec<String>,

    /// What to look up: callsign, bio or dxcc.
    #[arg(long, short, default_value = "callsign", value_parser = parse_action)]
    pub action: LookupAction,

    /// Output format.
    #[arg(long, short, default_value = "console", ignore_case = true)]
    pub format: OutputFormat,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Do not show the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (no logging, no progress).
    #[arg(long, short)]
    pub quiet: bool,

    /// Forget the stored password and session before running.
    #[arg(long)]
    pub reset: bool,

    /// Print the config file path and exit.
    #[arg(long)]
    pub config_path: bool,
}

fn parse_action(value: &str) -> Result<LookupAction, String> {
    value.parse().map_err(|e: qrz_core::CoreError| e.to_string())
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one term resolved, or nothing failed.
    Success = 0,
    /// Fatal error, or every term failed.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let default_filter = if verbose {
        "qrz_cli=debug,qrz_fetch=debug,qrz_store=debug,qrz_core=debug,warn"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = if cli.config_path {
        controller::print_config_path()
    } else {
        controller::run(&cli).await
    };

    match result {
        Ok(code) => std::process::exit(code as i32),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(ExitCode::Error as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["qrz", "W1AW"]).unwrap();

        assert_eq!(cli.terms, vec!["W1AW"]);
        assert_eq!(cli.action, LookupAction::Callsign);
        assert_eq!(cli.format, OutputFormat::Console);
        assert_eq!(cli.timeout, None);
    }

    #[test]
    fn test_action_and_format_ignore_case() {
        let cli = Cli::try_parse_from(["qrz", "-a", "DXCC", "-f", "CSV", "291"]).unwrap();

        assert_eq!(cli.action, LookupAction::Dxcc);
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_format_aliases() {
        let cli = Cli::try_parse_from(["qrz", "--format", "markdown", "W1AW"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Md);

        let cli = Cli::try_parse_from(["qrz", "--format", "table", "W1AW"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Md);
    }

    #[test]
    fn test_terms_required() {
        let err = Cli::try_parse_from(["qrz"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_config_path_needs_no_terms() {
        let cli = Cli::try_parse_from(["qrz", "--config-path"]).unwrap();
        assert!(cli.config_path);
        assert!(cli.terms.is_empty());
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!(Cli::try_parse_from(["qrz", "-a", "qsl", "W1AW"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["qrz", "-v", "-q", "W1AW"]).is_err());
    }
}
