//! Graph coordinate mapper
//!
//! Maps a [`BalanceSeries`] onto a padded drawing rectangle. Output is purely
//! declarative: vertices for the remaining-budget polyline, the ceiling
//! reference line and two label anchors.

use chrono::{DateTime, Utc};
use mountview_domain::constants::{CHART_LABEL_OFFSET_PX, LABEL_CURRENT_BUDGET, LABEL_MAX_BUDGET};
use mountview_domain::{BalanceSeries, CanvasPoint, ChartConfig, ChartGeometry, ChartLabel};

/// Linear (time, value) → pixel transform for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    origin_ms: i64,
    span_ms: f64,
    value_min: f64,
    value_max: f64,
    left: f64,
    top: f64,
    inner_width: f64,
    inner_height: f64,
}

impl CoordinateMapper {
    /// Build the transform for `series` drawn against `company_budget`.
    ///
    /// The horizontal axis covers the series' time range; a zero-width range
    /// is widened to one millisecond. The vertical axis covers
    /// `[min(0, current, budget), max(budget, 1)]` so negative balances stay
    /// visible and a zero budget still has height.
    pub fn new(series: &BalanceSeries, company_budget: f64, surface: &ChartConfig) -> Self {
        let (min_time, max_time) = series
            .time_bounds()
            .unwrap_or((DateTime::<Utc>::UNIX_EPOCH, DateTime::<Utc>::UNIX_EPOCH));
        let origin_ms = min_time.timestamp_millis();
        let span_ms = match max_time.timestamp_millis() - origin_ms {
            0 => 1.0,
            span => span as f64,
        };

        let padding = surface.padding.max(0.0);
        Self {
            origin_ms,
            span_ms,
            value_min: 0.0_f64.min(series.current_remaining).min(company_budget),
            value_max: company_budget.max(1.0),
            left: padding,
            top: padding,
            inner_width: (surface.width - 2.0 * padding).max(0.0),
            inner_height: (surface.height - 2.0 * padding).max(0.0),
        }
    }

    /// Horizontal pixel for `time`.
    pub fn x(&self, time: DateTime<Utc>) -> f64 {
        let offset = (time.timestamp_millis() - self.origin_ms) as f64;
        self.left + offset / self.span_ms * self.inner_width
    }

    /// Larger values draw higher on the surface.
    pub fn y(&self, value: f64) -> f64 {
        let fraction = (value - self.value_min) / (self.value_max - self.value_min);
        self.top + self.inner_height - fraction * self.inner_height
    }

    /// Left edge of the inner rectangle.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right edge of the inner rectangle.
    pub fn right(&self) -> f64 {
        self.left + self.inner_width
    }
}

/// Map `series` onto the drawing surface described by `surface`.
pub fn map_to_canvas(
    series: &BalanceSeries,
    company_budget: f64,
    surface: &ChartConfig,
) -> ChartGeometry {
    let mapper = CoordinateMapper::new(series, company_budget, surface);

    let remaining_line_points: Vec<CanvasPoint> = series
        .points
        .iter()
        .map(|point| CanvasPoint::new(mapper.x(point.time), mapper.y(point.remaining_budget)))
        .collect();

    let ceiling_y = mapper.y(company_budget);
    let max_budget_line_points =
        vec![CanvasPoint::new(mapper.left(), ceiling_y), CanvasPoint::new(mapper.right(), ceiling_y)];

    let current_anchor = remaining_line_points
        .last()
        .copied()
        .unwrap_or_else(|| CanvasPoint::new(mapper.right(), mapper.y(series.current_remaining)));

    ChartGeometry {
        remaining_line_points,
        max_budget_line_points,
        max_budget_label: ChartLabel {
            text: LABEL_MAX_BUDGET.to_string(),
            anchor: CanvasPoint::new(mapper.left(), ceiling_y - CHART_LABEL_OFFSET_PX),
        },
        current_budget_label: ChartLabel {
            text: LABEL_CURRENT_BUDGET.to_string(),
            anchor: CanvasPoint::new(current_anchor.x, current_anchor.y - CHART_LABEL_OFFSET_PX),
        },
    }
}
