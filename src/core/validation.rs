//! # Validation
//!
//! Field rules shared by every form. Each check is pure and runs
//! synchronously before the action that depends on it mutates anything.
//!
//! Numeric input is parsed into a `Decimal` (or a day count) and returned as a
//! `Result`, so a bad value never travels into arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming.
    Required { field: &'static str },
    /// The text could not be parsed as a number.
    NotANumber(String),
    /// Parsed fine, but the value was zero or negative.
    NotPositive(Decimal),
    /// A whole number was expected (day counts).
    NotWholeNumber(Decimal),
    /// Too large to represent as a day count.
    OutOfRange(Decimal),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { field } => write!(f, "{field} is required"),
            ValidationError::NotANumber(raw) => write!(f, "'{raw}' is not a number"),
            ValidationError::NotPositive(value) => write!(f, "{value} is not greater than zero"),
            ValidationError::NotWholeNumber(value) => write!(f, "{value} is not a whole number"),
            ValidationError::OutOfRange(value) => write!(f, "{value} is out of range"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// True iff `s` has at least one non-whitespace character.
pub fn validate_non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Returns the trimmed value, or `Required` naming the field.
pub fn require<'a>(field: &'static str, s: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(trimmed)
    }
}

/// Parse free text as a strictly positive decimal.
pub fn parse_positive_number(s: &str) -> Result<Decimal, ValidationError> {
    let trimmed = s.trim();
    let value = Decimal::from_str(trimmed)
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(value));
    }
    Ok(value)
}

/// Parse free text as a rental duration: a positive whole number of days.
pub fn parse_positive_days(s: &str) -> Result<u32, ValidationError> {
    let value = parse_positive_number(s)?;
    if !value.fract().is_zero() {
        return Err(ValidationError::NotWholeNumber(value));
    }
    value.to_u32().ok_or(ValidationError::OutOfRange(value))
}
