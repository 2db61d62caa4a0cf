//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Display placeholders
pub const MISSING_VALUE_PLACEHOLDER: &str = "-";

// Budget flag labels
pub const LABEL_NO_BUDGET: &str = "No Budget";
pub const LABEL_WITHIN_BUDGET: &str = "Within Budget";
pub const LABEL_OVER_BUDGET_PREFIX: &str = "Over by";

// Chart labels
pub const LABEL_MAX_BUDGET: &str = "Max Budget";
pub const LABEL_CURRENT_BUDGET: &str = "Current Budget";

/// Vertical distance (px) between a reference line and its text anchor.
pub const CHART_LABEL_OFFSET_PX: f64 = 6.0;

// Chart defaults
pub const DEFAULT_CHART_WIDTH: f64 = 640.0;
pub const DEFAULT_CHART_HEIGHT: f64 = 320.0;
pub const DEFAULT_CHART_PADDING: f64 = 32.0;

// Empty-state messages
pub const EMPTY_HISTORY_MESSAGE: &str = "No request history yet.";
pub const EMPTY_DECIDED_MESSAGE: &str = "No approvals or denials yet.";
pub const EMPTY_APPROVALS_MESSAGE: &str = "No requests are waiting for approval.";

// Upstream proxy defaults
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8787";
