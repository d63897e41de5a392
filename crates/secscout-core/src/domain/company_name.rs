use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const DEFAULT_MIN_NAME_LEN: usize = 4;
pub const DEFAULT_MAX_NAME_LEN: usize = 25;

/// Inclusive character-length bounds for a company name query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBounds {
    min: usize,
    max: usize,
}

impl NameBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, ValidationError> {
        if min == 0 || min > max {
            return Err(ValidationError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(self) -> usize {
        self.min
    }

    pub const fn max(self) -> usize {
        self.max
    }
}

impl Default for NameBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_NAME_LEN,
            max: DEFAULT_MAX_NAME_LEN,
        }
    }
}

/// Company name query that passed length validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Trim surrounding whitespace and check the length against `bounds`.
    pub fn parse(input: &str, bounds: NameBounds) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let len = trimmed.chars().count();

        if len < bounds.min {
            return Err(ValidationError::NameTooShort {
                len,
                min: bounds.min,
                max: bounds.max,
            });
        }
        if len > bounds.max {
            return Err(ValidationError::NameTooLong {
                len,
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CompanyName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean form of [`CompanyName::parse`].
pub fn validate(raw: &str, bounds: NameBounds) -> bool {
    CompanyName::parse(raw, bounds).is_ok()
}
