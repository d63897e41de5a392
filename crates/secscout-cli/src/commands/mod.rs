mod lookup;
mod snapshot;

use secscout_core::{Outcome, RetryConfig, TickerSnapshot};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Result of one command, rendered by [`crate::output`].
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    Lookup(Outcome),
    Snapshot(TickerSnapshot),
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    let retry = retry_config(cli.no_retry);
    match &cli.command {
        Command::Lookup(args) => lookup::run(args, cli, retry).await.map(Report::Lookup),
        Command::Snapshot(args) => snapshot::run(args, cli.timeout_ms, &retry)
            .await
            .map(Report::Snapshot),
    }
}

fn retry_config(no_retry: bool) -> RetryConfig {
    if no_retry {
        RetryConfig::no_retry()
    } else {
        RetryConfig::default()
    }
}
