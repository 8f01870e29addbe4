// ABOUTME: Input validation for enumerated settings
// ABOUTME: Allow-list membership with default coercion, list preference value parsing

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Configuration error: allow-list is empty")]
    EmptyAllowList,

    #[error("Configuration error: default {0} is not in the allow-list")]
    DefaultNotAllowed(i64),

    #[error("Invalid integer value: {0}")]
    InvalidInteger(String),

    #[error("Invalid value: {0}. Must be one of: {1}")]
    NotAllowed(i64, String),

    #[error("Value cannot be empty")]
    EmptyValue,
}

impl ValidationError {
    /// Errors caused by how a setting was declared rather than by user input
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ValidationError::EmptyAllowList | ValidationError::DefaultNotAllowed(_)
        )
    }
}

/// Outcome of checking a candidate against an allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validated {
    /// The value to use: the candidate, or the default when it was rejected
    pub value: i64,
    /// True when the candidate was replaced by the default
    pub coerced: bool,
}

/// Check `candidate` against `allowed`, falling back to `default` on a miss.
///
/// Order of `allowed` only matters for display. An empty list, or a default
/// outside the list, is a configuration error.
pub fn validate_enumerated(
    candidate: i64,
    allowed: &[i64],
    default: i64,
) -> Result<Validated, ValidationError> {
    if allowed.is_empty() {
        return Err(ValidationError::EmptyAllowList);
    }

    if !allowed.contains(&default) {
        return Err(ValidationError::DefaultNotAllowed(default));
    }

    if allowed.contains(&candidate) {
        Ok(Validated {
            value: candidate,
            coerced: false,
        })
    } else {
        Ok(Validated {
            value: default,
            coerced: true,
        })
    }
}

/// Parse the string value a list preference hands back on change
pub fn parse_list_value(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyValue);
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidInteger(raw.to_string()))
}

/// Ordered, non-empty set of legal codes for one setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValueSet {
    values: Vec<i64>,
}

impl AllowedValueSet {
    /// Build a set, keeping the first occurrence of duplicate codes
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, ValidationError> {
        let mut deduped = Vec::new();
        for value in values {
            if !deduped.contains(&value) {
                deduped.push(value);
            }
        }

        if deduped.is_empty() {
            return Err(ValidationError::EmptyAllowList);
        }

        Ok(Self { values: deduped })
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Display position of `value`
    pub fn position(&self, value: i64) -> Option<usize> {
        self.values.iter().position(|v| *v == value)
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn validate(&self, candidate: i64, default: i64) -> Result<Validated, ValidationError> {
        validate_enumerated(candidate, &self.values, default)
    }

    /// Reject `candidate` outright instead of coercing it
    pub fn check(&self, candidate: i64) -> Result<i64, ValidationError> {
        if self.contains(candidate) {
            Ok(candidate)
        } else {
            Err(ValidationError::NotAllowed(candidate, self.describe()))
        }
    }

    fn describe(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
