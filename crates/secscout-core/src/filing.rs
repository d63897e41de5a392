//! Filing search client and latest-link extraction.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ApiToken, Settings};
use crate::domain::{Filing, FilingQuery};
use crate::error::ExtractionError;
use crate::http_client::{HttpClient, HttpError, HttpRequest};
use crate::retry::{execute_with_retry, RetryConfig};

/// Client for `POST <base>?token=<token>` full-text filing search.
#[derive(Clone)]
pub struct FilingSearch {
    http_client: Arc<dyn HttpClient>,
    api_base: String,
    token: ApiToken,
    timeout_ms: u64,
    retry: RetryConfig,
}

impl FilingSearch {
    pub fn new(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http_client,
            api_base: settings.api_base.clone(),
            token: settings.token.clone(),
            timeout_ms: settings.timeout_ms,
            retry: settings.retry.clone(),
        }
    }

    pub fn request_for(&self, query: &FilingQuery) -> HttpRequest {
        HttpRequest::post(self.api_base.as_str())
            .with_query("token", self.token.expose())
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(query.to_body().to_string())
            .with_timeout_ms(self.timeout_ms)
    }

    /// Run `query` and return the raw response body.
    pub async fn search(&self, query: &FilingQuery) -> Result<String, HttpError> {
        let request = self.request_for(query);
        debug!(
            url = request.redacted_url(),
            cik = %query.cik(),
            form_type = query.form_type(),
            "querying filing search endpoint"
        );

        let response = execute_with_retry(self.http_client.as_ref(), request, &self.retry).await?;
        if !response.is_success() {
            warn!(
                status = response.status,
                "filing search endpoint returned a non-success status"
            );
        }

        Ok(response.body)
    }
}

/// First (newest) filing record of a search response.
///
/// Only `filings[0].linkToTxt` has to be present. The other fields are decoded
/// when they can be and left empty otherwise.
pub fn latest_filing(body: &str) -> Result<Filing, ExtractionError> {
    let value = parse_body(body)?;
    let record = first_record(&value)?;
    let link = link_of(record)?;

    let mut filing = Filing::deserialize(record).unwrap_or_else(|error| {
        warn!(%error, "filing record only partially decoded");
        Filing::default()
    });
    filing.link_to_txt = Some(link);
    Ok(filing)
}

/// Plain-text link of the newest filing in a search response.
pub fn extract_latest_link(body: &str) -> Result<String, ExtractionError> {
    let value = parse_body(body)?;
    link_of(first_record(&value)?)
}

fn parse_body(body: &str) -> Result<Value, ExtractionError> {
    serde_json::from_str(body)
        .map_err(|error| ExtractionError::Malformed(format!("invalid JSON: {error}")))
}

fn first_record(value: &Value) -> Result<&Value, ExtractionError> {
    let filings = value
        .get("filings")
        .and_then(Value::as_array)
        .ok_or_else(|| ExtractionError::Malformed(String::from("missing 'filings' field")))?;
    filings.first().ok_or(ExtractionError::Empty)
}

fn link_of(record: &Value) -> Result<String, ExtractionError> {
    match record.get("linkToTxt").and_then(Value::as_str).map(str::trim) {
        Some(link) if !link.is_empty() => Ok(link.to_owned()),
        _ => Err(ExtractionError::Malformed(String::from(
            "missing 'filings[0].linkToTxt' field",
        ))),
    }
}
