use serde::Serialize;
use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors raised before any network call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("company name must be between {min} and {max} characters long (got {len})")]
    NameTooShort { len: usize, min: usize, max: usize },
    #[error("company name must be between {min} and {max} characters long (got {len})")]
    NameTooLong { len: usize, min: usize, max: usize },
    #[error("invalid name length bounds: min={min}, max={max}")]
    InvalidLengthBounds { min: usize, max: usize },
    #[error("CIK cannot be empty")]
    EmptyCik,
}

/// Failures of the name-mapping lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("name-mapping request failed: {0}")]
    Transport(HttpError),
    #[error("failed to decode name-mapping response: {0}")]
    Decode(String),
}

/// Failures of the interactive many-match selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection '{input}' is not a number")]
    NotANumber { input: String },
    #[error("selection {choice} is out of range, expected 1..={max}")]
    OutOfRange { choice: i64, max: usize },
    #[error("could not read selection: {0}")]
    Prompt(String),
}

/// Reasons a filing search response yields no usable document link.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ExtractionError {
    #[error("no filings matched the requested form type")]
    Empty,
    #[error("filing response is malformed: {0}")]
    Malformed(String),
}

/// Fatal errors that end a lookup run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Resolver(ResolverError),
    #[error("filing search request failed: {0}")]
    FilingSearch(HttpError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

impl PipelineError {
    /// True for failures caused by the network rather than by the user.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Resolver(ResolverError::Transport(_)) | Self::FilingSearch(_)
        )
    }
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("secret store '{path}' could not be loaded: {reason}")]
    SecretStoreUnavailable { path: String, reason: String },
    #[error("secret '{key}' is missing from the secret store")]
    MissingSecret { key: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Errors raised while saving the ticker directory snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("ticker directory request failed: {0}")]
    Transport(HttpError),
    #[error("ticker directory returned status {0}")]
    Status(u16),
    #[error("ticker directory is not a JSON object: {0}")]
    Decode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
