//! Domain types and models
//!
//! Everything here is rebuilt from upstream data on every view load; nothing
//! is cached or persisted by this crate.

pub mod budget;
pub mod chart;
pub mod request;
pub mod series;
pub mod summary;
pub mod timestamp;
pub mod views;

pub use budget::{BudgetContext, BudgetFlag, BudgetSnapshot, DepartmentBudget, RawBudgetSnapshot};
pub use chart::{CanvasPoint, ChartGeometry, ChartLabel};
pub use request::{RawRequest, Request, RequestStatus};
pub use series::{BalanceSeries, SeriesPoint};
pub use summary::Summary;
pub use timestamp::Timestamp;
pub use views::{ApprovalRow, ApprovalView, Decision, HistoryRow, HistoryView};
