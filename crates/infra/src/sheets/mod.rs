//! Spreadsheet proxy integration
//!
//! The proxy fronts a spreadsheet with three actions: `list` (request rows),
//! `getCompany` (budget record) and `updateStatus` (approver decision).

pub mod client;
pub mod errors;

pub use client::SheetsClient;
pub use errors::{SheetsError, SheetsErrorCategory};
