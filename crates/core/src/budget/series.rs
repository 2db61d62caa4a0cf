//! Running-balance series builder
//!
//! Replays approved requests in decision order against the company budget
//! and records the remaining balance after each one.

use chrono::{DateTime, Utc};
use mountview_domain::{BalanceSeries, Request, RequestStatus, SeriesPoint, Timestamp};
use tracing::debug;

/// Resolve the first *present* timestamp in priority order.
///
/// A present-but-unparseable value still wins over later candidates and
/// resolves to the epoch, as does a chain with nothing present.
pub fn resolve_timestamp(candidates: &[&Timestamp]) -> DateTime<Utc> {
    candidates
        .iter()
        .find(|timestamp| timestamp.is_present())
        .map_or(DateTime::<Utc>::UNIX_EPOCH, |timestamp| timestamp.instant_or_epoch())
}

/// Priority chain for ordering approvals: update time, then decision time,
/// then creation time, then the epoch.
pub fn decision_timestamp(request: &Request) -> &Timestamp {
    [&request.updated_at, &request.decision_at, &request.created_at]
        .into_iter()
        .find(|timestamp| timestamp.is_present())
        .unwrap_or(&request.created_at)
}

/// Instant used to order `request` in the series.
pub fn decision_time(request: &Request) -> DateTime<Utc> {
    resolve_timestamp(&[&request.updated_at, &request.decision_at, &request.created_at])
}

/// Build the series using the current wall-clock time for the degenerate
/// cases.
pub fn build_series(requests: &[Request], company_budget: f64) -> BalanceSeries {
    build_series_at(requests, company_budget, Utc::now())
}

/// Build the series with an explicit "now".
///
/// The first point is the company budget at the first approval's decision
/// time (or `now` when nothing is approved). Each approval then emits one
/// point; ties keep their input order and the balance may go negative. With
/// no approvals a second point at `now` is appended so a line can be drawn.
pub fn build_series_at(
    requests: &[Request],
    company_budget: f64,
    now: DateTime<Utc>,
) -> BalanceSeries {
    let mut approved: Vec<(DateTime<Utc>, &Request)> = requests
        .iter()
        .filter(|request| request.status == RequestStatus::Approved)
        .map(|request| (decision_time(request), request))
        .collect();
    // sort_by_key is stable: equal decision times keep input order
    approved.sort_by_key(|(time, _)| *time);

    let anchor_time = approved.first().map_or(now, |(time, _)| *time);
    let mut points = Vec::with_capacity(approved.len() + 2);
    points.push(SeriesPoint::new(anchor_time, company_budget));

    let mut spent = 0.0;
    for (time, request) in &approved {
        spent += request.total();
        points.push(SeriesPoint::new(*time, company_budget - spent));
    }

    if points.len() == 1 {
        points.push(SeriesPoint::new(now, company_budget));
    }

    debug!(
        approved = approved.len(),
        total_spent = spent,
        current_remaining = company_budget - spent,
        "built running-balance series"
    );

    BalanceSeries { points, total_spent: spent, current_remaining: company_budget - spent }
}
