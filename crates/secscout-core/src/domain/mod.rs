//! # Domain Models
//!
//! Types that flow through a lookup run.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CompanyName`] | Length-validated name query |
//! | [`NameBounds`] | Inclusive length bounds for a name query |
//! | [`CompanyCandidate`] | One entity returned by the name-mapping service |
//! | [`CandidateSet`] | Candidates in response order |
//! | [`Cik`] | Resolved regulator identifier |
//! | [`FilingQuery`] | Search request for the newest filing of a form type |
//! | [`FilingResult`] | Parsed filing search response |
//!
//! ## Validation
//!
//! Construction enforces invariants, so a `CompanyName` is always within its
//! bounds and a `Cik` is never empty:
//!
//! ```rust
//! use secscout_core::{CompanyName, NameBounds, ValidationError};
//!
//! let name = CompanyName::parse("Apple", NameBounds::default()).unwrap();
//! assert_eq!(name.as_str(), "Apple");
//!
//! let short = CompanyName::parse("xy", NameBounds::default());
//! assert!(matches!(short, Err(ValidationError::NameTooShort { .. })));
//! ```

mod candidate;
mod company_name;
mod filing;
mod wire;

pub use candidate::{CandidateSet, Cik, CompanyCandidate, UNLISTED_TICKER};
pub use company_name::{
    validate, CompanyName, NameBounds, DEFAULT_MAX_NAME_LEN, DEFAULT_MIN_NAME_LEN,
};
pub use filing::{
    Filing, FilingDocument, FilingEntity, FilingQuery, FilingResult, FilingTotal,
    ANNUAL_REPORT_FORM,
};
