//! Route definitions

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::context::AppContext;
use crate::handlers;

/// Build the application router.
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes())
        .with_state(context)
}

fn api_routes() -> Router<Arc<AppContext>> {
    Router::new()
        .route("/history", get(handlers::budget::history))
        .route("/approvals", get(handlers::budget::approvals))
        .route("/requests/{id}/decision", post(handlers::budget::decide))
}
