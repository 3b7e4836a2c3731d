//! Sales ledger domain module.
//!
//! This crate contains the record store and its derived aggregates,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod entry;
pub mod ledger;

pub use entry::{Department, SalesEntry, MAX_AMOUNT_DIGITS, MAX_DEPARTMENT_CHARS};
pub use ledger::SalesLedger;
