//! Shared test helpers for `mountview-core` integration tests.
//!
//! An in-memory spreadsheet stands in for the proxy so service tests can
//! focus on behaviour instead of HTTP plumbing.

pub mod sheet;

use serde_json::json;

use mountview_domain::RawRequest;

/// Upstream-shaped request row with string cells, as the proxy returns them.
pub fn raw_request(
    request_id: &str,
    department: &str,
    price: &str,
    amount: &str,
    status: &str,
    updated_at: &str,
) -> RawRequest {
    serde_json::from_value(json!({
        "requestId": request_id,
        "name": "Dana Whitfield",
        "department": department,
        "itemName": "Monitor arm",
        "itemPrice": price,
        "itemAmount": amount,
        "status": status,
        "requestedAt": "2026-02-20T08:00:00Z",
        "createdAt": "2026-02-20T08:00:00Z",
        "updatedAt": updated_at,
    }))
    .expect("valid raw request")
}
