//! Request normaliser
//!
//! Coerces upstream rows into canonical [`Request`]s. Normalisation is
//! fail-open: a bad status becomes `pending`, a non-numeric amount becomes
//! `0`, an unparseable date becomes [`Timestamp::Invalid`]. Nothing here
//! returns an error.

use mountview_domain::{
    coerce_number, value_to_text, BudgetSnapshot, DepartmentBudget, RawBudgetSnapshot, RawRequest,
    Request, RequestStatus, Timestamp,
};
use serde_json::Value;
use tracing::debug;

/// Normalise a single upstream row.
pub fn normalize(raw: &RawRequest) -> Request {
    let request = Request {
        request_id: value_to_text(&raw.request_id),
        name: value_to_text(&raw.name),
        department: value_to_text(&raw.department),
        item_name: value_to_text(&raw.item_name),
        item_price: coerce_amount(&raw.item_price, "itemPrice"),
        item_amount: coerce_amount(&raw.item_amount, "itemAmount"),
        status: normalize_status(&raw.status),
        requested_at: Timestamp::from_value(&raw.requested_at),
        created_at: Timestamp::from_value(&raw.created_at),
        updated_at: Timestamp::from_value(&raw.updated_at),
        decision_at: Timestamp::from_value(&raw.decision_at),
    };

    if !request.updated_at.is_present() && !request.created_at.is_present() {
        debug!(request_id = %request.request_id, "request has no creation or update time");
    }

    request
}

/// Normalise every row, preserving input order.
pub fn normalize_all(raw: &[RawRequest]) -> Vec<Request> {
    raw.iter().map(normalize).collect()
}

/// Lowercase the value and accept exactly `pending`, `approved` or
/// `rejected`; anything else, including `null`, is `pending`.
pub fn normalize_status(value: &Value) -> RequestStatus {
    if value.is_null() {
        return RequestStatus::Pending;
    }

    let text = value_to_text(value);
    text.parse().unwrap_or_else(|_| {
        debug!(status = %text, "unrecognised status reclassified as pending");
        RequestStatus::Pending
    })
}

/// Coerce an upstream company record. An absent record yields the zero
/// budget with no departments.
///
/// Department entries that are not objects, or whose name is blank, are
/// dropped; they are spreadsheet filler rows, not budgets.
pub fn normalize_snapshot(raw: Option<&RawBudgetSnapshot>) -> BudgetSnapshot {
    let Some(raw) = raw else {
        return BudgetSnapshot::default();
    };

    let departments = match &raw.departments {
        Value::Array(entries) => entries.iter().filter_map(normalize_department).collect(),
        Value::Null => Vec::new(),
        other => {
            debug!(departments = %other, "ignoring non-array departments field");
            Vec::new()
        }
    };

    BudgetSnapshot { company_budget: coerce_number(&raw.company_budget), departments }
}

fn normalize_department(entry: &Value) -> Option<DepartmentBudget> {
    let object = entry.as_object()?;
    let department = object.get("department").map(value_to_text).unwrap_or_default();
    if department.trim().is_empty() {
        return None;
    }

    let budget = object.get("budget").map_or(0.0, coerce_number);
    Some(DepartmentBudget { department, budget })
}

fn coerce_amount(value: &Value, field: &'static str) -> f64 {
    let amount = coerce_number(value);
    if amount == 0.0 && !value.is_null() && !matches!(value, Value::Number(_)) {
        debug!(field, raw = %value, "non-numeric amount treated as zero");
    }
    amount
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn status_is_lowercased_and_validated() {
        assert_eq!(normalize_status(&json!("APPROVED")), RequestStatus::Approved);
        assert_eq!(normalize_status(&json!("rejected")), RequestStatus::Rejected);
        assert_eq!(normalize_status(&json!("Pending")), RequestStatus::Pending);
    }

    #[test]
    fn invalid_statuses_become_pending() {
        for value in [json!(null), json!(""), json!("denied"), json!(" approved"), json!(42)] {
            assert_eq!(normalize_status(&value), RequestStatus::Pending, "value: {value}");
        }
    }

    #[test]
    fn amounts_are_coerced_and_negatives_kept() {
        let request = normalize(&raw(json!({
            "itemPrice": "19.99",
            "itemAmount": "three"
        })));
        assert_eq!(request.item_price, 19.99);
        assert_eq!(request.item_amount, 0.0);
        assert_eq!(request.total(), 0.0);

        let refund = normalize(&raw(json!({ "itemPrice": -40, "itemAmount": 2 })));
        assert_eq!(refund.total(), -80.0);
    }

    #[test]
    fn text_fields_accept_non_string_cells() {
        let request = normalize(&raw(json!({
            "requestId": 1007,
            "name": "Dana",
            "department": null
        })));
        assert_eq!(request.request_id, "1007");
        assert_eq!(request.name, "Dana");
        assert_eq!(request.department, "");
    }

    #[test]
    fn timestamps_are_parsed_without_failing() {
        let request = normalize(&raw(json!({
            "createdAt": "2026-02-24T09:30:00Z",
            "updatedAt": "not a date"
        })));
        assert!(request.created_at.instant().is_some());
        assert_eq!(request.updated_at, Timestamp::Invalid("not a date".into()));
        assert_eq!(request.decision_at, Timestamp::Missing);
    }

    #[test]
    fn missing_snapshot_defaults_to_zero_budget() {
        let snapshot = normalize_snapshot(None);
        assert_eq!(snapshot.company_budget, 0.0);
        assert!(snapshot.departments.is_empty());
    }

    #[test]
    fn snapshot_cells_are_coerced() {
        let raw: RawBudgetSnapshot = serde_json::from_value(json!({
            "companyBudget": "5,000",
            "departments": [
                { "department": "Ops", "budget": "200" },
                { "department": "", "budget": 10 },
                "filler",
                { "department": "IT" }
            ]
        }))
        .unwrap();

        let snapshot = normalize_snapshot(Some(&raw));
        assert_eq!(snapshot.company_budget, 0.0);
        assert_eq!(
            snapshot.departments,
            vec![
                DepartmentBudget { department: "Ops".into(), budget: 200.0 },
                DepartmentBudget { department: "IT".into(), budget: 0.0 },
            ]
        );
    }

    #[test]
    fn non_array_departments_are_ignored() {
        let raw: RawBudgetSnapshot =
            serde_json::from_value(json!({ "companyBudget": 900, "departments": "Ops=200" }))
                .unwrap();
        let snapshot = normalize_snapshot(Some(&raw));
        assert_eq!(snapshot.company_budget, 900.0);
        assert!(snapshot.departments.is_empty());
    }
}
