//! # Mountview Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The budget engine: normalizer, classifier, aggregator, running-balance
//!   series builder and graph coordinate mapper
//! - View assembly for the history page and the approval list
//! - Port interfaces (traits) for the spreadsheet proxy
//! - `BudgetService`, which joins the upstream fetches and drives the engine
//!
//! ## Architecture Principles
//! - Only depends on `mountview-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits
//! - Engine functions are synchronous and never fail

pub mod budget;
pub mod views;
pub mod workflow;

#[cfg(test)]
mod test_fixtures;

// Re-export specific items to avoid ambiguity
pub use budget::{
    aggregate, build_series, build_series_at, classify, map_to_canvas, normalize, normalize_all,
    normalize_snapshot, CoordinateMapper,
};
pub use views::{build_approval_view, build_history_view, decided_history};
pub use workflow::ports::{BudgetSource, RequestSource, StatusUpdater};
pub use workflow::{BudgetService, BudgetSettings};
