//! Running-balance series

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remaining company budget at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub time: DateTime<Utc>,
    /// May be negative once approvals exceed the ceiling
    pub remaining_budget: f64,
}

impl SeriesPoint {
    /// Point at `time` with `remaining_budget` left.
    pub fn new(time: DateTime<Utc>, remaining_budget: f64) -> Self {
        Self { time, remaining_budget }
    }
}

/// Chronological trace of the remaining company budget.
///
/// Invariants upheld by the series builder: at least two points, times
/// non-decreasing, the first point equals the company budget, and
/// `current_remaining == company_budget - total_spent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSeries {
    pub points: Vec<SeriesPoint>,
    pub total_spent: f64,
    pub current_remaining: f64,
}

impl BalanceSeries {
    /// Earliest and latest instants, or `None` for an empty series.
    pub fn time_bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.points.first()?.time;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), point| (min.min(point.time), max.max(point.time)));
        Some((min, max))
    }
}
