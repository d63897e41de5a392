//! # Secscout Core
//!
//! Resolve a free-text company name to a CIK and fetch the link to its most
//! recent annual filing.
//!
//! ## Overview
//!
//! A lookup runs these stages in order, each one waiting on the previous:
//!
//! 1. **Validate** the name length ([`CompanyName::parse`])
//! 2. **Resolve** the name against the mapping endpoint ([`NameResolver`])
//! 3. **Filter** candidates without a public ticker ([`CandidateSet::filter_usable`])
//! 4. **Disambiguate** zero / one / many matches ([`disambiguate`])
//! 5. **Search** the newest filing of the form type ([`FilingQuery`], [`FilingSearch`])
//! 6. **Extract** the plain-text link ([`extract_latest_link`])
//!
//! [`Pipeline`] chains all of them and returns an [`Outcome`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Settings and the `.env` secret store |
//! | [`disambiguation`] | Zero/one/many classification and menu selection |
//! | [`domain`] | Names, candidates, CIKs and filing types |
//! | [`error`] | Error taxonomy |
//! | [`filing`] | Filing search client and link extraction |
//! | [`http_client`] | Transport abstraction |
//! | [`pipeline`] | End-to-end lookup run |
//! | [`resolver`] | Name-mapping client |
//! | [`retry`] | Bounded retry with jittered backoff |
//! | [`snapshot`] | Ticker directory download |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use secscout_core::{Pipeline, ReqwestHttpClient, ScriptedPrompt, SecretStore, Settings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = SecretStore::default().load_token()?;
//!     let pipeline = Pipeline::new(Arc::new(ReqwestHttpClient::new()), &Settings::new(token));
//!
//!     let outcome = pipeline.run("Apple", &mut ScriptedPrompt::new(["1"])).await?;
//!     if let Some(link) = outcome.link() {
//!         println!("{link}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Nothing in this crate exits the process. Input and response problems become
//! [`Outcome`] variants; transport and selection failures come back as
//! [`PipelineError`] for the caller to act on.
//!
//! ## Security
//!
//! The API token travels in the query string, so request URLs are only ever
//! logged through [`HttpRequest::redacted_url`] and [`ApiToken`] hides its
//! value from `Debug`.

pub mod config;
pub mod disambiguation;
pub mod domain;
pub mod error;
pub mod filing;
pub mod http_client;
pub mod pipeline;
pub mod resolver;
pub mod retry;
pub mod snapshot;

pub use config::{
    ApiToken, SecretStore, Settings, DEFAULT_API_BASE, DEFAULT_SECRET_STORE, DEFAULT_TICKERS_URL,
    DEFAULT_TIMEOUT_MS, TOKEN_KEY,
};

pub use disambiguation::{
    disambiguate, parse_selection, MenuOption, Resolution, ScriptedPrompt, SelectionPrompt,
};

pub use domain::{
    validate, CandidateSet, Cik, CompanyCandidate, CompanyName, Filing, FilingDocument,
    FilingEntity, FilingQuery, FilingResult, FilingTotal, NameBounds, ANNUAL_REPORT_FORM,
    DEFAULT_MAX_NAME_LEN, DEFAULT_MIN_NAME_LEN, UNLISTED_TICKER,
};

pub use error::{
    ConfigError, ExtractionError, PipelineError, ResolverError, SelectionError, SnapshotError,
    ValidationError,
};

pub use filing::{extract_latest_link, latest_filing, FilingSearch};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};

pub use pipeline::{Outcome, Pipeline};

pub use resolver::NameResolver;

pub use retry::{execute_with_retry, Backoff, RetryConfig};

pub use snapshot::{download_tickers, TickerSnapshot};
