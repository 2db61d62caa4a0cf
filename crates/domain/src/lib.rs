//! # Mountview Domain
//!
//! Business domain types and models for the Mountview expense-approval
//! budget engine.
//!
//! This crate contains:
//! - Purchase request records, raw and normalised
//! - Budget snapshots, the per-request budget flag and its context
//! - Running-balance series and chart geometry types
//! - View models handed to the rendering layer
//! - Domain error types, configuration and constants
//!
//! ## Architecture
//! - No dependencies on other Mountview crates
//! - No I/O
//! - Pure domain models and display helpers

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::currency::format_currency;
pub use utils::number::{coerce_number, value_to_text};
