//! Port interfaces for the spreadsheet proxy
//!
//! These traits define the boundaries between the budget engine and the
//! upstream data source. `mountview-infra` provides the HTTP adapter.

use async_trait::async_trait;
use mountview_domain::{RawBudgetSnapshot, RawRequest, RequestStatus, Result};

/// Source of purchase request rows
#[async_trait]
pub trait RequestSource: Send + Sync {
    /// Fetch every request row, in upstream order
    async fn list_requests(&self) -> Result<Vec<RawRequest>>;
}

/// Source of company budget records
#[async_trait]
pub trait BudgetSource: Send + Sync {
    /// Fetch the budget record for `company_id`; `None` when upstream has no
    /// such company
    async fn budget_snapshot(&self, company_id: &str) -> Result<Option<RawBudgetSnapshot>>;
}

/// Writes an approver's decision back upstream
#[async_trait]
pub trait StatusUpdater: Send + Sync {
    /// Set `request_id` to `status` upstream
    async fn update_status(&self, request_id: &str, status: RequestStatus) -> Result<()>;
}
