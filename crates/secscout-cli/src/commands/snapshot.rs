use secscout_core::{download_tickers, ReqwestHttpClient, RetryConfig, TickerSnapshot};
use tracing::info;

use crate::cli::SnapshotArgs;
use crate::error::CliError;

pub async fn run(
    args: &SnapshotArgs,
    timeout_ms: u64,
    retry: &RetryConfig,
) -> Result<TickerSnapshot, CliError> {
    info!(url = %args.url, "downloading ticker directory");
    let client = ReqwestHttpClient::new();
    Ok(download_tickers(&client, &args.url, &args.output, timeout_ms, retry).await?)
}
