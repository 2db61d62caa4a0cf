//! View models consumed by the rendering layer
//!
//! Display strings are pre-formatted here so every renderer shows the same
//! currency and date formats.

use serde::{Deserialize, Serialize};

use super::budget::BudgetContext;
use super::chart::ChartGeometry;
use super::request::RequestStatus;
use super::series::BalanceSeries;
use super::summary::Summary;
use crate::impl_wire_enum_conversions;

/// One decided request in the history list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub request_id: String,
    pub department: String,
    pub item_name: String,
    pub total: f64,
    pub total_display: String,
    pub status: RequestStatus,
    pub status_label: &'static str,
    /// Decision time in long display form, or `-`
    pub decided_at_display: String,
}

/// Budget history page: summary, decided list and running-balance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub company_budget: f64,
    pub company_budget_display: String,
    pub current_remaining_display: String,
    pub summary: Summary,
    pub headline: String,
    pub rows: Vec<HistoryRow>,
    /// Set when `rows` is empty
    pub empty_message: Option<String>,
    pub series: BalanceSeries,
    pub chart: ChartGeometry,
}

/// One request in the approver's list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRow {
    pub request_id: String,
    pub name: String,
    pub department: String,
    pub item_name: String,
    pub item_price_display: String,
    pub item_amount_display: String,
    pub requested_at_display: String,
    pub status: RequestStatus,
    pub status_label: &'static str,
    pub budget: BudgetContext,
    /// Only pending requests can be accepted or denied
    pub actionable: bool,
    /// Ask for confirmation before accepting an over-budget request
    pub confirm_on_approve: bool,
}

/// Approver's list of requests with budget flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalView {
    pub rows: Vec<ApprovalRow>,
    pub empty_message: Option<String>,
}

/// Approver's action on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Deny,
}

impl_wire_enum_conversions!(Decision {
    Approve => "approve",
    Deny => "deny",
});

impl Decision {
    /// Status the request moves to.
    pub const fn target_status(&self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Deny => RequestStatus::Rejected,
        }
    }
}
