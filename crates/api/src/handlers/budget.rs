//! Budget history and approval handlers

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use mountview_domain::{ApprovalView, Decision, HistoryView};
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::logging::log_route_outcome;

/// Body of `POST /api/requests/{id}/decision`
#[derive(Debug, Deserialize)]
pub struct DecisionBody {
    pub decision: Decision,
}

/// `GET /api/history`
pub async fn history(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<HistoryView>, ApiError> {
    let started = Instant::now();
    let result = context.budget_service.history_view().await;
    log_route_outcome("history", started.elapsed(), &result);
    Ok(Json(result?))
}

/// `GET /api/approvals`
pub async fn approvals(
    State(context): State<Arc<AppContext>>,
) -> Result<Json<ApprovalView>, ApiError> {
    let started = Instant::now();
    let result = context.budget_service.approval_view().await;
    log_route_outcome("approvals", started.elapsed(), &result);
    Ok(Json(result?))
}

/// `POST /api/requests/{id}/decision`
pub async fn decide(
    State(context): State<Arc<AppContext>>,
    Path(request_id): Path<String>,
    body: Result<Json<DecisionBody>, JsonRejection>,
) -> Result<Json<ApprovalView>, ApiError> {
    let Json(DecisionBody { decision }) = body?;

    let started = Instant::now();
    let result = context.budget_service.decide(&request_id, decision).await;
    log_route_outcome("decide", started.elapsed(), &result);
    Ok(Json(result?))
}
