//! Name-mapping client: company name in, ordered candidate list out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ApiToken, Settings};
use crate::domain::{CandidateSet, CompanyCandidate, CompanyName};
use crate::error::ResolverError;
use crate::http_client::{HttpClient, HttpRequest};
use crate::retry::{execute_with_retry, RetryConfig};

/// Client for `GET <base>/mapping/name/<name>/?token=<token>`.
#[derive(Clone)]
pub struct NameResolver {
    http_client: Arc<dyn HttpClient>,
    api_base: String,
    token: ApiToken,
    timeout_ms: u64,
    retry: RetryConfig,
}

impl NameResolver {
    pub fn new(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http_client,
            api_base: settings.api_base.clone(),
            token: settings.token.clone(),
            timeout_ms: settings.timeout_ms,
            retry: settings.retry.clone(),
        }
    }

    pub fn request_for(&self, name: &CompanyName) -> HttpRequest {
        let endpoint = format!(
            "{}/mapping/name/{}/",
            self.api_base,
            urlencoding::encode(name.as_str())
        );
        HttpRequest::get(endpoint)
            .with_query("token", self.token.expose())
            .with_timeout_ms(self.timeout_ms)
    }

    /// Look up `name` and decode the candidates in response order.
    ///
    /// A non-success status is logged and the body still goes to the decoder.
    pub async fn resolve(&self, name: &CompanyName) -> Result<CandidateSet, ResolverError> {
        let request = self.request_for(name);
        debug!(url = request.redacted_url(), "querying name-mapping endpoint");

        let response = execute_with_retry(self.http_client.as_ref(), request, &self.retry)
            .await
            .map_err(ResolverError::Transport)?;

        if !response.is_success() {
            warn!(
                status = response.status,
                "name-mapping endpoint returned a non-success status"
            );
        }

        let candidates: Vec<CompanyCandidate> = serde_json::from_str(&response.body)
            .map_err(|error| ResolverError::Decode(error.to_string()))?;
        debug!(count = candidates.len(), "decoded name-mapping candidates");

        Ok(CandidateSet::new(candidates))
    }
}
