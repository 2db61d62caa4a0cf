//! Budget history view: summary, decided list and running-balance chart

use chrono::{DateTime, Utc};
use mountview_domain::constants::{EMPTY_DECIDED_MESSAGE, EMPTY_HISTORY_MESSAGE};
use mountview_domain::{
    format_currency, BudgetSnapshot, ChartConfig, HistoryRow, HistoryView, Request,
};

use super::or_placeholder;
use crate::budget::{
    aggregate, build_series_at, decision_timestamp, map_to_canvas, resolve_timestamp,
};

/// Ordering key for the decided list: update time, then creation time.
///
/// Deliberately shorter than the decision-time chain used by the series.
pub fn history_ordering_time(request: &Request) -> DateTime<Utc> {
    resolve_timestamp(&[&request.updated_at, &request.created_at])
}

/// Approved and rejected requests, newest first. Ties keep input order.
pub fn decided_history(requests: &[Request]) -> Vec<&Request> {
    let mut decided: Vec<&Request> =
        requests.iter().filter(|request| request.status.is_decided()).collect();
    decided.sort_by_key(|request| std::cmp::Reverse(history_ordering_time(request)));
    decided
}

/// History-list row for a decided request.
pub fn history_row(request: &Request) -> HistoryRow {
    let total = request.total();
    HistoryRow {
        request_id: or_placeholder(&request.request_id),
        department: or_placeholder(&request.department),
        item_name: or_placeholder(&request.item_name),
        total,
        total_display: format_currency(total),
        status: request.status,
        status_label: request.status.label(),
        decided_at_display: decision_timestamp(request).display_long(),
    }
}

/// Assemble the history page for `requests` against `snapshot`.
pub fn build_history_view(
    requests: &[Request],
    snapshot: &BudgetSnapshot,
    surface: &ChartConfig,
    now: DateTime<Utc>,
) -> HistoryView {
    let summary = aggregate(requests);
    let series = build_series_at(requests, snapshot.company_budget, now);
    let chart = map_to_canvas(&series, snapshot.company_budget, surface);
    let rows: Vec<HistoryRow> = decided_history(requests).into_iter().map(history_row).collect();

    let empty_message = if requests.is_empty() {
        Some(EMPTY_HISTORY_MESSAGE.to_string())
    } else if rows.is_empty() {
        Some(EMPTY_DECIDED_MESSAGE.to_string())
    } else {
        None
    };

    HistoryView {
        company_budget: snapshot.company_budget,
        company_budget_display: format_currency(snapshot.company_budget),
        current_remaining_display: format_currency(series.current_remaining),
        headline: summary.headline(),
        summary,
        rows,
        empty_message,
        series,
        chart,
    }
}
