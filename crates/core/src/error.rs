//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// A sales amount failed validation (exceeds the decimal digit cap).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A department label failed validation (empty or too long).
    #[error("invalid department label: {0}")]
    InvalidDepartmentLabel(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_department(msg: impl Into<String>) -> Self {
        Self::InvalidDepartmentLabel(msg.into())
    }
}
