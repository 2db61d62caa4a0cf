//! Budget engine
//!
//! Pure, synchronous computation over a fetched request list and budget
//! snapshot. Every function here is total: malformed input is normalised to
//! a safe default instead of failing.

pub mod aggregator;
pub mod chart;
pub mod classifier;
pub mod normalizer;
pub mod series;

pub use aggregator::aggregate;
pub use chart::{map_to_canvas, CoordinateMapper};
pub use classifier::classify;
pub use normalizer::{normalize, normalize_all, normalize_snapshot, normalize_status};
pub use series::{
    build_series, build_series_at, decision_time, decision_timestamp, resolve_timestamp,
};
