//! # Booking
//!
//! The customer-side draft and the pure price calculation behind it.
//!
//! `compute_total` is called twice for one booking: once to show the total in
//! the summary modal and once when the booking is confirmed. Both calls see
//! the same inputs, so both produce the same `Decimal`.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::core::catalog::Car;
use crate::core::validation::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    NoCarSelected,
    InvalidDays(ValidationError),
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::NoCarSelected => write!(f, "no car selected"),
            BookingError::InvalidDays(e) => write!(f, "invalid day count: {e}"),
        }
    }
}

impl std::error::Error for BookingError {}

/// Transient state of the rent screen: which car, and the raw day count text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub selected_car: Option<Car>,
    pub days: String,
}

impl BookingDraft {
    pub fn clear(&mut self) {
        self.selected_car = None;
        self.days.clear();
    }

    pub fn quote(&self) -> Result<BookingQuote, BookingError> {
        quote(self.selected_car.as_ref(), &self.days)
    }
}

/// A validated price for a car and a day count, not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuote {
    pub car: Car,
    pub days: u32,
    pub total: Decimal,
}

impl BookingQuote {
    pub fn confirm(self, confirmed_at: DateTime<Local>) -> BookingResult {
        BookingResult {
            car: self.car,
            days: self.days,
            total: self.total,
            confirmed_at,
        }
    }
}

/// The payload handed to the confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingResult {
    pub car: Car,
    pub days: u32,
    pub total: Decimal,
    pub confirmed_at: DateTime<Local>,
}

/// Validated car, day count and total. A total too large for `Decimal`
/// is reported as an out-of-range day count.
fn checked_inputs<'a>(
    selected_car: Option<&'a Car>,
    days_text: &str,
) -> Result<(&'a Car, u32, Decimal), BookingError> {
    let car = selected_car.ok_or(BookingError::NoCarSelected)?;
    let days = validation::parse_positive_days(days_text).map_err(BookingError::InvalidDays)?;
    let days_value = Decimal::from(days);
    let total = days_value
        .checked_mul(car.cost_per_day)
        .ok_or(BookingError::InvalidDays(ValidationError::OutOfRange(days_value)))?;
    Ok((car, days, total))
}

/// `days * cost_per_day`, or why it can't be computed.
pub fn compute_total(selected_car: Option<&Car>, days_text: &str) -> Result<Decimal, BookingError> {
    checked_inputs(selected_car, days_text).map(|(_, _, total)| total)
}

pub fn quote(selected_car: Option<&Car>, days_text: &str) -> Result<BookingQuote, BookingError> {
    let (car, days, total) = checked_inputs(selected_car, days_text)?;
    Ok(BookingQuote {
        car: car.clone(),
        days,
        total,
    })
}

/// Render an amount with the currency prefix, dropping trailing zeros.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{}", amount.normalize())
}
