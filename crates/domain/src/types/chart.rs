//! Declarative chart geometry
//!
//! The coordinate mapper emits vertices and label anchors in pixel space; an
//! SVG or canvas renderer draws them.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// A vertex in drawing-surface pixels; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    /// Point at pixel coordinates `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Text anchored at a point on the drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ChartLabel {
    pub text: String,
    pub anchor: CanvasPoint,
}

/// Everything the renderer needs to draw the running-balance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ChartGeometry {
    /// Polyline of the remaining budget over time
    pub remaining_line_points: Vec<CanvasPoint>,
    /// Horizontal reference line at the budget ceiling
    pub max_budget_line_points: Vec<CanvasPoint>,
    pub max_budget_label: ChartLabel,
    pub current_budget_label: ChartLabel,
}
