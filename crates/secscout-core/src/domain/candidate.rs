use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::wire::null_as_default;
use crate::ValidationError;

/// Ticker value the mapping service uses for entities without a public listing.
pub const UNLISTED_TICKER: &str = "N/A";

/// Central Index Key assigned to a filing entity by the regulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cik(String);

impl Cik {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCik);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Cik {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Cik {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cik> for String {
    fn from(value: Cik) -> Self {
        value.0
    }
}

/// One entity returned by the name-mapping service.
///
/// Every field is optional on the wire; missing or `null` values decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CompanyCandidate {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(rename = "CIK", deserialize_with = "null_as_default")]
    pub cik: String,
    #[serde(rename = "CUSIP", deserialize_with = "null_as_default")]
    pub cusip: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exchange: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_delisted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sector: String,
    #[serde(deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic_sector: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sic_industry: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fama_sector: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fama_industry: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
}

impl CompanyCandidate {
    /// A candidate is usable when it carries a real public-market ticker.
    pub fn is_usable(&self) -> bool {
        let ticker = self.ticker.trim();
        !ticker.is_empty() && ticker != UNLISTED_TICKER
    }

    pub fn cik(&self) -> Result<Cik, ValidationError> {
        Cik::parse(&self.cik)
    }
}

/// Candidates in the order the mapping service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateSet(Vec<CompanyCandidate>);

impl CandidateSet {
    pub fn new(candidates: Vec<CompanyCandidate>) -> Self {
        Self(candidates)
    }

    /// Keep usable candidates only, preserving relative order.
    pub fn filter_usable(self) -> Self {
        Self(self.0.into_iter().filter(CompanyCandidate::is_usable).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompanyCandidate> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<CompanyCandidate> {
        self.0
    }
}

impl From<Vec<CompanyCandidate>> for CandidateSet {
    fn from(value: Vec<CompanyCandidate>) -> Self {
        Self::new(value)
    }
}

impl IntoIterator for CandidateSet {
    type Item = CompanyCandidate;
    type IntoIter = std::vec::IntoIter<CompanyCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
