//! Approver's request list with per-request budget flags

use mountview_domain::constants::{EMPTY_APPROVALS_MESSAGE, MISSING_VALUE_PLACEHOLDER};
use mountview_domain::{
    format_currency, ApprovalRow, ApprovalView, BudgetSnapshot, Request, RequestStatus,
};

use super::or_placeholder;
use crate::budget::classify;

/// Department spend already counted against each row.
///
/// Every request is checked against its full department budget on its own;
/// a running department balance is not accumulated across the list.
pub(crate) const ALREADY_SPENT_IN_DEPARTMENT: f64 = 0.0;

/// Approval-list row for `request`, flagged against `snapshot`.
pub fn approval_row(request: &Request, snapshot: &BudgetSnapshot) -> ApprovalRow {
    let budget = classify(request, snapshot, ALREADY_SPENT_IN_DEPARTMENT);
    let actionable = request.status == RequestStatus::Pending;

    ApprovalRow {
        request_id: request.request_id.clone(),
        name: or_placeholder(&request.name),
        department: or_placeholder(&request.department),
        item_name: or_placeholder(&request.item_name),
        item_price_display: format_currency(request.item_price),
        item_amount_display: amount_display(request.item_amount),
        requested_at_display: request.requested_at.display_short(),
        status: request.status,
        status_label: request.status.label(),
        confirm_on_approve: actionable && budget.is_over(),
        actionable,
        budget,
    }
}

/// One row per request, in input order.
pub fn build_approval_view(requests: &[Request], snapshot: &BudgetSnapshot) -> ApprovalView {
    let rows: Vec<ApprovalRow> =
        requests.iter().map(|request| approval_row(request, snapshot)).collect();
    let empty_message = rows.is_empty().then(|| EMPTY_APPROVALS_MESSAGE.to_string());
    ApprovalView { rows, empty_message }
}

fn amount_display(amount: f64) -> String {
    if amount == 0.0 {
        MISSING_VALUE_PLACEHOLDER.to_string()
    } else {
        amount.to_string()
    }
}
