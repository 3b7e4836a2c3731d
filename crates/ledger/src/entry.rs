use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesbook_core::{DomainError, DomainResult};

/// Maximum number of decimal digits in a sales amount.
pub const MAX_AMOUNT_DIGITS: u32 = 10;

/// Maximum department label length, in characters.
pub const MAX_DEPARTMENT_CHARS: usize = 10;

/// Smallest amount that exceeds the digit cap.
const AMOUNT_LIMIT: u64 = 10u64.pow(MAX_AMOUNT_DIGITS);

/// Department label (value object).
///
/// Valid labels are non-empty and at most [`MAX_DEPARTMENT_CHARS`] characters.
/// Compared by value; hashable and ordered so it can key the totals mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Department(String);

impl Department {
    pub fn new(label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(DomainError::invalid_department("label must not be empty"));
        }
        if label.chars().count() > MAX_DEPARTMENT_CHARS {
            return Err(DomainError::invalid_department(format!(
                "label exceeds {MAX_DEPARTMENT_CHARS} characters"
            )));
        }
        Ok(Self(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Department {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One recorded sales transaction (immutable value object).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesEntry {
    date: NaiveDate,
    /// Unit-less amount in whole currency units, capped at 10 decimal digits.
    amount: u64,
    department: Department,
}

impl SalesEntry {
    /// Construct a validated entry.
    ///
    /// Rejects amounts over the digit cap; the department carries its own
    /// validation. Invalid input is reported, never silently discarded.
    pub fn new(date: NaiveDate, amount: u64, department: Department) -> DomainResult<Self> {
        if amount >= AMOUNT_LIMIT {
            return Err(DomainError::invalid_amount(format!(
                "amount exceeds {MAX_AMOUNT_DIGITS} digits"
            )));
        }
        Ok(Self {
            date,
            amount,
            department,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn department(&self) -> &Department {
        &self.department
    }
}
