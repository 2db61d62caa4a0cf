//! Shared helpers for HTTP route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mountview_app::{router, AppContext};
use mountview_core::{BudgetService, BudgetSettings, BudgetSource, RequestSource, StatusUpdater};
use mountview_domain::{
    ChartConfig, Config, MountviewError, RawBudgetSnapshot, RawRequest, RequestStatus,
    Result as DomainResult, SheetsConfig,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const COMPANY: &str = "mountview";

#[derive(Default)]
struct SheetState {
    rows: Vec<RawRequest>,
    company: Option<RawBudgetSnapshot>,
    updates: Vec<(String, RequestStatus)>,
    unavailable: bool,
}

/// In-memory sheet standing in for the proxy.
#[derive(Default, Clone)]
pub struct FakeSheet {
    state: Arc<Mutex<SheetState>>,
}

impl FakeSheet {
    /// Two approved Ops requests, one pending over-budget Ops request and
    /// one pending Legal request with no department budget.
    pub fn seeded() -> Self {
        let sheet = Self::default();
        {
            let mut state = sheet.state.lock().unwrap();
            state.rows = vec![
                row("REQ-1", "Ops", "60", "1", "approved", "2026-03-01T10:00:00Z"),
                row("REQ-2", "Ops", "15", "2", "approved", "2026-03-04T10:00:00Z"),
                row("REQ-3", "Ops", "250", "1", "pending", ""),
                row("REQ-4", "Legal", "80", "1", "pending", ""),
            ];
            state.company = Some(RawBudgetSnapshot {
                company_budget: json!(1000),
                departments: json!([{ "department": "Ops", "budget": "200" }]),
            });
        }
        sheet
    }

    pub fn unavailable(self) -> Self {
        self.state.lock().unwrap().unavailable = true;
        self
    }

    pub fn updates(&self) -> Vec<(String, RequestStatus)> {
        self.state.lock().unwrap().updates.clone()
    }
}

fn row(
    id: &str,
    department: &str,
    price: &str,
    amount: &str,
    status: &str,
    updated: &str,
) -> RawRequest {
    serde_json::from_value(json!({
        "requestId": id,
        "name": "Priya Raman",
        "department": department,
        "itemName": "Standing desk",
        "itemPrice": price,
        "itemAmount": amount,
        "status": status,
        "requestedAt": "2026-02-27T09:15:00Z",
        "createdAt": "2026-02-27T09:15:00Z",
        "updatedAt": updated,
    }))
    .expect("valid raw request")
}

#[async_trait]
impl RequestSource for FakeSheet {
    async fn list_requests(&self) -> DomainResult<Vec<RawRequest>> {
        let state = self.state.lock().unwrap();
        if state.unavailable {
            return Err(MountviewError::Network("proxy unreachable".into()));
        }
        Ok(state.rows.clone())
    }
}

#[async_trait]
impl BudgetSource for FakeSheet {
    async fn budget_snapshot(&self, company_id: &str) -> DomainResult<Option<RawBudgetSnapshot>> {
        let state = self.state.lock().unwrap();
        Ok(if company_id == COMPANY { state.company.clone() } else { None })
    }
}

#[async_trait]
impl StatusUpdater for FakeSheet {
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

/// Router backed by `sheet`.
pub fn app(sheet: &FakeSheet) -> Router {
    let port = Arc::new(sheet.clone());
    let mut sheets = SheetsConfig::new("https://proxy.test/exec");
    sheets.company_id = Some(COMPANY.to_string());
    let config = Config { sheets, chart: ChartConfig::default(), server: Default::default() };

    let service = BudgetService::new(
        port.clone(),
        port.clone(),
        port,
        BudgetSettings { company_id: Some(COMPANY.to_string()), chart: config.chart },
    );
    router(Arc::new(AppContext::with_service(config, Arc::new(service))))
}

/// Send `request` and decode the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body =
        if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).expect("json body") };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}
