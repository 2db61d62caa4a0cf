//! Budget service - fetches upstream data and assembles views

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mountview_domain::{
    ApprovalView, BudgetSnapshot, ChartConfig, Decision, HistoryView, MountviewError, Request,
    RequestStatus, Result,
};
use tracing::{debug, info, instrument, warn};

use super::ports::{BudgetSource, RequestSource, StatusUpdater};
use crate::budget::{classify, normalize_all, normalize_snapshot};
use crate::views::approvals::ALREADY_SPENT_IN_DEPARTMENT;
use crate::views::{build_approval_view, build_history_view};

/// Settings the service needs from configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetSettings {
    /// Company whose budget record is fetched; without one every department
    /// is unbudgeted and the company ceiling is zero
    pub company_id: Option<String>,
    pub chart: ChartConfig,
}

/// Budget service
///
/// Each call fetches fresh inputs, runs the pure engine and returns a view.
/// Nothing is cached between calls.
pub struct BudgetService {
    requests: Arc<dyn RequestSource>,
    budgets: Arc<dyn BudgetSource>,
    updater: Arc<dyn StatusUpdater>,
    settings: BudgetSettings,
}

impl BudgetService {
    /// Create a new budget service
    pub fn new(
        requests: Arc<dyn RequestSource>,
        budgets: Arc<dyn BudgetSource>,
        updater: Arc<dyn StatusUpdater>,
        settings: BudgetSettings,
    ) -> Self {
        Self { requests, budgets, updater, settings }
    }

    /// Settings the service was built with.
    pub fn settings(&self) -> &BudgetSettings {
        &self.settings
    }

    /// History page as of now.
    pub async fn history_view(&self) -> Result<HistoryView> {
        self.history_view_at(Utc::now()).await
    }

    /// History page with an explicit "now" for the degenerate series cases.
    #[instrument(skip(self))]
    pub async fn history_view_at(&self, now: DateTime<Utc>) -> Result<HistoryView> {
        let (requests, snapshot) = self.fetch().await?;
        Ok(build_history_view(&requests, &snapshot, &self.settings.chart, now))
    }

    /// Approver's list with budget flags.
    #[instrument(skip(self))]
    pub async fn approval_view(&self) -> Result<ApprovalView> {
        let (requests, snapshot) = self.fetch().await?;
        Ok(build_approval_view(&requests, &snapshot))
    }

    /// Record an approver's decision and return the refreshed list.
    ///
    /// Only pending requests can be decided. Over-budget approvals are
    /// allowed; the overage is logged.
    #[instrument(skip(self))]
    pub async fn decide(&self, request_id: &str, decision: Decision) -> Result<ApprovalView> {
        let (requests, snapshot) = self.fetch().await?;
        let request = find_pending(&requests, request_id)?;

        let target = decision.target_status();
        if target == RequestStatus::Approved {
            let context = classify(request, &snapshot, ALREADY_SPENT_IN_DEPARTMENT);
            if context.is_over() {
                info!(
                    department = %context.department,
                    over_by = context.over_by(),
                    "approving request over department budget"
                );
            }
        }

        self.updater.update_status(request_id, target).await?;
        info!(status = %target, "request status updated");

        self.approval_view().await
    }

    /// Fetch the request list and budget record concurrently.
    async fn fetch(&self) -> Result<(Vec<Request>, BudgetSnapshot)> {
        let budget = async {
            match self.settings.company_id.as_deref() {
                Some(company_id) => self.budgets.budget_snapshot(company_id).await,
                None => Ok(None),
            }
        };
        let (rows, record) = tokio::join!(self.requests.list_requests(), budget);
        let (rows, record) = (rows?, record?);

        if record.is_none() {
            warn!(
                company_id = ?self.settings.company_id,
                "no company budget record; using zero budget"
            );
        }

        let requests = normalize_all(&rows);
        let snapshot = normalize_snapshot(record.as_ref());
        debug!(
            request_count = requests.len(),
            department_count = snapshot.departments.len(),
            company_budget = snapshot.company_budget,
            "fetched budget inputs"
        );

        Ok((requests, snapshot))
    }
}

fn find_pending<'a>(requests: &'a [Request], request_id: &str) -> Result<&'a Request> {
    let request = requests
        .iter()
        .find(|request| request.request_id == request_id)
        .ok_or_else(|| MountviewError::NotFound(format!("request {request_id}")))?;

    if request.status != RequestStatus::Pending {
        return Err(MountviewError::InvalidInput(format!(
            "request {request_id} is already {}",
            request.status
        )));
    }

    Ok(request)
}
