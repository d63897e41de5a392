//! End-to-end lookup run: validate, resolve, disambiguate, search, extract.
//!
//! Stages run strictly in sequence. Data-level dead ends come back as an
//! [`Outcome`]; only transport and selection failures are errors.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::Settings;
use crate::disambiguation::{disambiguate, Resolution, SelectionPrompt};
use crate::domain::{
    CandidateSet, Cik, CompanyCandidate, CompanyName, Filing, FilingQuery, NameBounds,
};
use crate::error::{ExtractionError, PipelineError, ResolverError, ValidationError};
use crate::filing::{latest_filing, FilingSearch};
use crate::http_client::HttpClient;
use crate::resolver::NameResolver;

/// Terminal state of a lookup run that did not hit a fatal error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The name failed length validation; no request was made.
    InvalidInput {
        input: String,
        reason: ValidationError,
    },
    /// No usable candidate. `decode_error` is set when the mapping response
    /// could not be decoded and was treated as empty.
    NoMatch {
        query: String,
        unlisted: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        decode_error: Option<String>,
    },
    /// The chosen candidate carries no CIK to search filings with.
    MissingCik { company: CompanyCandidate },
    NoFiling {
        company: CompanyCandidate,
        cik: Cik,
        form_type: String,
        reason: ExtractionError,
    },
    Found {
        company: CompanyCandidate,
        cik: Cik,
        filing: Box<Filing>,
        link: String,
    },
}

impl Outcome {
    /// Link of the latest filing, when one was found.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Found { link, .. } => Some(link),
            _ => None,
        }
    }
}

/// Wires the resolver and filing search together for repeated runs.
#[derive(Clone)]
pub struct Pipeline {
    resolver: NameResolver,
    search: FilingSearch,
    name_bounds: NameBounds,
    form_type: String,
}

impl Pipeline {
    pub fn new(http_client: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            resolver: NameResolver::new(Arc::clone(&http_client), settings),
            search: FilingSearch::new(http_client, settings),
            name_bounds: settings.name_bounds,
            form_type: settings.form_type.clone(),
        }
    }

    pub async fn run(
        &self,
        raw: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<Outcome, PipelineError> {
        let span = info_span!("lookup", run_id = %Uuid::new_v4());
        self.run_stages(raw, prompt).instrument(span).await
    }

    async fn run_stages(
        &self,
        raw: &str,
        prompt: &mut dyn SelectionPrompt,
    ) -> Result<Outcome, PipelineError> {
        let name = match CompanyName::parse(raw, self.name_bounds) {
            Ok(name) => name,
            Err(reason) => {
                warn!(%reason, "rejected company name");
                return Ok(Outcome::InvalidInput {
                    input: raw.trim().to_owned(),
                    reason,
                });
            }
        };
        info!(name = %name, "resolving company name");

        let (candidates, decode_error) = match self.resolver.resolve(&name).await {
            Ok(candidates) => (candidates, None),
            Err(ResolverError::Decode(message)) => {
                warn!(error = %message, "name-mapping response treated as empty");
                (CandidateSet::default(), Some(message))
            }
            Err(error) => return Err(PipelineError::Resolver(error)),
        };

        let company = match disambiguate(candidates, prompt)? {
            Resolution::NoMatch { unlisted } => {
                info!(unlisted, "no usable candidate");
                return Ok(Outcome::NoMatch {
                    query: name.as_str().to_owned(),
                    unlisted,
                    decode_error,
                });
            }
            Resolution::Matched(company) => company,
        };

        let cik = match company.cik() {
            Ok(cik) => cik,
            Err(_) => {
                warn!(company = %company.name, "matched candidate has no CIK");
                return Ok(Outcome::MissingCik { company });
            }
        };
        info!(company = %company.name, %cik, "company resolved");

        let query = FilingQuery::latest(cik.clone(), self.form_type.as_str());
        let body = self
            .search
            .search(&query)
            .await
            .map_err(PipelineError::FilingSearch)?;

        match latest_filing(&body) {
            Ok(filing) => {
                let link = filing
                    .link_to_txt
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_owned();
                info!(%link, filed_at = %filing.filed_at, "latest filing found");
                Ok(Outcome::Found {
                    company,
                    cik,
                    filing: Box::new(filing),
                    link,
                })
            }
            Err(reason) => {
                warn!(%reason, "no usable filing link");
                Ok(Outcome::NoFiling {
                    company,
                    cik,
                    form_type: self.form_type.clone(),
                    reason,
                })
            }
        }
    }
}
