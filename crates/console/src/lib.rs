//! Interactive console shell for the sales ledger.
//!
//! Presents a text menu, collects and validates user input, and renders the
//! ledger's aggregate reports. All ledger semantics live in
//! `salesbook-ledger`; this crate is IO and formatting only.

pub mod app;
pub mod input;
pub mod menu;

pub use app::Console;
pub use input::InputError;
pub use menu::MenuOption;
