//! Structured logging helpers for route handlers

use std::time::Duration;

use mountview_domain::MountviewError;
use tracing::{info, warn};

/// Log the outcome of a route with structured fields.
///
/// `route` is a stable identifier such as `"history"`. Upstream failures
/// are logged at `warn` with the error kind so they can be filtered without
/// parsing messages.
#[inline]
pub fn log_route_outcome<T>(
    route: &str,
    elapsed: Duration,
    result: &Result<T, MountviewError>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match result {
        Ok(_) => info!(route, duration_ms, "route_success"),
        Err(err) => {
            warn!(route, duration_ms, error_kind = error_label(err), error = %err, "route_failure")
        }
    }
}

/// Stable label for an error, suitable for logs.
#[inline]
pub fn error_label(error: &MountviewError) -> &'static str {
    error.kind()
}
