//! CLI argument definitions for secscout.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | Resolve a company name and print its latest filing link |
//! | `snapshot` | Save the regulator's ticker directory to a file |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Per-request timeout in ms |
//! | `--no-retry` | `false` | Disable the single transport retry |
//! | `-v` | warn | Log verbosity (repeat for more) |
//!
//! # Examples
//!
//! ```bash
//! # Prompt for the name interactively
//! secscout lookup
//!
//! # Latest annual report for Apple, as JSON
//! secscout --format json lookup Apple --pretty
//!
//! # Latest quarterly report
//! secscout lookup Microsoft --form 10-Q
//!
//! # Save company_tickers.json
//! secscout snapshot --output tickers.json
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use secscout_core::{
    ANNUAL_REPORT_FORM, DEFAULT_API_BASE, DEFAULT_MAX_NAME_LEN, DEFAULT_MIN_NAME_LEN,
    DEFAULT_SECRET_STORE, DEFAULT_TICKERS_URL, DEFAULT_TIMEOUT_MS,
};

/// Find a company's latest annual report from its name.
#[derive(Debug, Parser)]
#[command(
    name = "secscout",
    author,
    version,
    about = "Resolve a company name to its CIK and fetch its latest filing",
    long_about = "secscout turns a free-text company name into a CIK using a name-mapping \
service, asks you to choose when several listed companies match, and prints the link \
to the company's most recent filing of the requested form type.\n\
\n\
The API token is read from SEC_API_TOKEN in the environment or in a .env file."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Disable the single retry on transport failures.
    #[arg(long, global = true, default_value_t = false)]
    pub no_retry: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Single JSON object.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a company name and print the link to its latest filing.
    ///
    /// When several listed companies match, a numbered menu is shown and one
    /// option must be chosen.
    ///
    /// # Examples
    ///
    ///   secscout lookup Apple
    ///   secscout lookup "Delta Air" --form 10-Q
    Lookup(LookupArgs),

    /// Download company_tickers.json and save it to a file.
    ///
    /// # Examples
    ///
    ///   secscout snapshot
    ///   secscout snapshot --output data/tickers.json
    Snapshot(SnapshotArgs),
}

/// Arguments for the `lookup` command.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Company name; read from the terminal when omitted.
    pub name: Option<String>,

    /// Form type to search for.
    #[arg(long = "form", default_value = ANNUAL_REPORT_FORM)]
    pub form_type: String,

    /// Minimum accepted name length in characters.
    #[arg(long, default_value_t = DEFAULT_MIN_NAME_LEN)]
    pub min_len: usize,

    /// Maximum accepted name length in characters.
    #[arg(long, default_value_t = DEFAULT_MAX_NAME_LEN)]
    pub max_len: usize,

    /// Base URL of the mapping and filing search API.
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Secret store holding SEC_API_TOKEN.
    #[arg(long, default_value = DEFAULT_SECRET_STORE)]
    pub env_file: PathBuf,
}

/// Arguments for the `snapshot` command.
#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Destination file.
    #[arg(long, short, default_value = "company_tickers.json")]
    pub output: PathBuf,

    /// Ticker directory URL.
    #[arg(long, default_value = DEFAULT_TICKERS_URL)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_defaults_match_core_defaults() {
        let cli = Cli::parse_from(["secscout", "lookup", "Apple"]);
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(args.name.as_deref(), Some("Apple"));
        assert_eq!(args.form_type, "10-K");
        assert_eq!((args.min_len, args.max_len), (4, 25));
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.timeout_ms, 10_000);
    }

    #[test]
    fn global_flags_are_accepted_after_subcommand() {
        let cli = Cli::parse_from(["secscout", "lookup", "--format", "json", "-vv", "--no-retry"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_retry);
    }
}
