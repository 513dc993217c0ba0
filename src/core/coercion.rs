//! Typed coercion of raw person cells.

use crate::domain::model::Sex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    Sex(String),
    Age(String),
}

impl std::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoercionError::Sex(value) => write!(f, "Invalid sex value: {}", value),
            CoercionError::Age(value) => write!(f, "Invalid age value: {}", value),
        }
    }
}

/// Trims surrounding whitespace and any wrapping `"` left by the reader,
/// which does not interpret quotes.
pub fn clean_cell(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

pub fn parse_sex(raw: &str) -> Result<Sex, CoercionError> {
    raw.trim()
        .parse::<Sex>()
        .map_err(|e| CoercionError::Sex(e.0))
}

/// Plain base-10 digits only; signs, fractions and overflow are rejected.
pub fn parse_age(raw: &str) -> Result<i32, CoercionError> {
    let value = raw.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoercionError::Age(value.to_string()));
    }
    value
        .parse::<i32>()
        .map_err(|_| CoercionError::Age(value.to_string()))
}
