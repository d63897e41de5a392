//! Save the regulator's ticker directory (`company_tickers.json`) to disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::error::SnapshotError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::retry::{execute_with_retry, RetryConfig};

/// Summary of a saved ticker directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerSnapshot {
    pub path: PathBuf,
    pub bytes: usize,
    pub entries: usize,
}

/// Download the ticker directory at `url` and write it verbatim to `destination`.
///
/// The body must be a JSON object; anything else is refused before the file is
/// touched.
pub async fn download_tickers(
    client: &dyn HttpClient,
    url: &str,
    destination: &Path,
    timeout_ms: u64,
    retry: &RetryConfig,
) -> Result<TickerSnapshot, SnapshotError> {
    let request = HttpRequest::get(url).with_timeout_ms(timeout_ms);
    let response = execute_with_retry(client, request, retry)
        .await
        .map_err(SnapshotError::Transport)?;

    if !response.is_success() {
        return Err(SnapshotError::Status(response.status));
    }

    let entries = match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Object(map)) => map.len(),
        Ok(other) => {
            return Err(SnapshotError::Decode(format!(
                "expected an object, found {}",
                json_kind(&other)
            )))
        }
        Err(error) => return Err(SnapshotError::Decode(error.to_string())),
    };

    tokio::fs::write(destination, response.body.as_bytes()).await?;
    info!(path = %destination.display(), entries, "ticker directory saved");

    Ok(TickerSnapshot {
        path: destination.to_path_buf(),
        bytes: response.body.len(),
        entries,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
