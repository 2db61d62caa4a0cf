//! In-memory mock implementing every spreadsheet port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mountview_core::{BudgetSource, RequestSource, StatusUpdater};
use mountview_domain::{
    MountviewError, RawBudgetSnapshot, RawRequest, RequestStatus, Result as DomainResult,
};
use serde_json::Value;

#[derive(Default)]
struct SheetState {
    rows: Vec<RawRequest>,
    companies: HashMap<String, RawBudgetSnapshot>,
    updates: Vec<(String, RequestStatus)>,
    fail_list: bool,
}

/// Shared in-memory sheet. Status updates rewrite the stored row so a
/// subsequent list reflects them.
#[derive(Default, Clone)]
pub struct MockSheet {
    state: Arc<Mutex<SheetState>>,
}

impl MockSheet {
    pub fn new(rows: Vec<RawRequest>) -> Self {
        let sheet = Self::default();
        sheet.state.lock().unwrap().rows = rows;
        sheet
    }

    pub fn with_company(self, company_id: &str, snapshot: RawBudgetSnapshot) -> Self {
        self.state.lock().unwrap().companies.insert(company_id.to_string(), snapshot);
        self
    }

    /// Make `list_requests` fail with a network error.
    pub fn failing(self) -> Self {
        self.state.lock().unwrap().fail_list = true;
        self
    }

    pub fn updates(&self) -> Vec<(String, RequestStatus)> {
        self.state.lock().unwrap().updates.clone()
    }
}

#[async_trait]
impl RequestSource for MockSheet {
    async fn list_requests(&self) -> DomainResult<Vec<RawRequest>> {
        let state = self.state.lock().unwrap();
        if state.fail_list {
            return Err(MountviewError::Network("sheet unavailable".into()));
        }
        Ok(state.rows.clone())
    }
}

#[async_trait]
impl BudgetSource for MockSheet {
    async fn budget_snapshot(&self, company_id: &str) -> DomainResult<Option<RawBudgetSnapshot>> {
        Ok(self.state.lock().unwrap().companies.get(company_id).cloned())
    }
}

#[async_trait]
impl StatusUpdater for MockSheet {
    async fn update_status(&self, request_id: &str, status: RequestStatus) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        for row in state.rows.iter_mut() {
            if row.request_id == Value::from(request_id) {
                row.status = Value::from(status.as_str());
            }
        }
        state.updates.push((request_id.to_string(), status));
        Ok(())
    }
}
