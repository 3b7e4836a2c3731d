//! Line-level parsing and validation of user input.
//!
//! Invalid input is rejected with a reported error; nothing is clamped or
//! silently discarded.

use chrono::NaiveDate;
use thiserror::Error;

use salesbook_core::DomainError;
use salesbook_ledger::{Department, MAX_AMOUNT_DIGITS};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("date must be a valid calendar date formatted as YYYY-MM-DD (e.g. 2025-08-06)")]
    InvalidDate,

    #[error("amount must be a whole number of at most 10 digits")]
    InvalidAmount,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate)
}

/// Parse a sales amount: ASCII digits only, at most [`MAX_AMOUNT_DIGITS`]
/// of them. Signs, separators, and fractions are rejected.
pub fn parse_amount(raw: &str) -> Result<u64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidAmount);
    }
    if raw.len() > MAX_AMOUNT_DIGITS as usize {
        return Err(InputError::InvalidAmount);
    }
    raw.parse().map_err(|_| InputError::InvalidAmount)
}

/// Parse a department label; length and emptiness rules live on
/// [`Department`] itself.
pub fn parse_department(raw: &str) -> Result<Department, InputError> {
    Ok(Department::new(raw.trim())?)
}
