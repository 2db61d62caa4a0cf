//! View assembly
//!
//! Turns normalised requests and a budget snapshot into the display-ready
//! models in `mountview_domain::types::views`.

pub mod approvals;
pub mod history;

use mountview_domain::constants::MISSING_VALUE_PLACEHOLDER;

pub use approvals::{approval_row, build_approval_view};
pub use history::{build_history_view, decided_history, history_ordering_time, history_row};

/// Empty text renders as the placeholder.
pub(crate) fn or_placeholder(text: &str) -> String {
    if text.is_empty() {
        MISSING_VALUE_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}
