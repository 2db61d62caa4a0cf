//! Budget classifier
//!
//! Flags a request against its department's budget. The result is advisory:
//! it changes a label and may prompt the approver for confirmation, but it
//! never blocks submission or approval.

use mountview_domain::{BudgetContext, BudgetFlag, BudgetSnapshot, Request};

/// Classify `request` against `snapshot`.
///
/// `already_spent_in_department` is subtracted from the department budget
/// before comparing. The approval list passes `0.0`, so concurrent pending
/// requests in one department are each checked against the full budget.
pub fn classify(
    request: &Request,
    snapshot: &BudgetSnapshot,
    already_spent_in_department: f64,
) -> BudgetContext {
    let total = request.total();

    let Some(department_budget) = snapshot.department_budget(&request.department) else {
        return BudgetContext {
            department: request.department.clone(),
            total,
            remaining_before_this_request: 0.0,
            flag: BudgetFlag::Unbudgeted,
        };
    };

    let remaining = department_budget - already_spent_in_department;
    let flag = if total > remaining {
        BudgetFlag::Over { by: (total - remaining).max(0.0) }
    } else {
        BudgetFlag::WithinBudget
    };

    BudgetContext {
        department: request.department.clone(),
        total,
        remaining_before_this_request: remaining,
        flag,
    }
}

#[cfg(test)]
mod tests {
    use mountview_domain::DepartmentBudget;
    use proptest::prelude::*;

    use super::*;
    use crate::test_fixtures::RequestFixture;

    fn request(department: &str, price: f64, amount: f64) -> Request {
        RequestFixture::new("REQ-1").department(department).priced(price, amount).build()
    }

    fn snapshot() -> BudgetSnapshot {
        BudgetSnapshot {
            company_budget: 10_000.0,
            departments: vec![DepartmentBudget { department: "Ops".into(), budget: 200.0 }],
        }
    }

    #[test]
    fn over_budget_reports_overage() {
        let context = classify(&request("Ops", 125.0, 2.0), &snapshot(), 0.0);
        assert!(context.has_budget());
        assert!(context.is_over());
        assert_eq!(context.over_by(), 50.0);
        assert_eq!(context.remaining_before_this_request, 200.0);
        assert_eq!(context.label(), "Over by $50.00");
    }

    #[test]
    fn exactly_at_budget_is_within() {
        let context = classify(&request("Ops", 200.0, 1.0), &snapshot(), 0.0);
        assert_eq!(context.flag, BudgetFlag::WithinBudget);
        assert_eq!(context.over_by(), 0.0);
    }

    #[test]
    fn unknown_department_is_unbudgeted() {
        let context = classify(&request("Legal", 9999.0, 1.0), &snapshot(), 0.0);
        assert!(!context.has_budget());
        assert!(!context.is_over());
        assert_eq!(context.over_by(), 0.0);
        assert_eq!(context.label(), "No Budget");
    }

    #[test]
    fn department_match_is_case_sensitive() {
        let context = classify(&request("ops", 500.0, 1.0), &snapshot(), 0.0);
        assert_eq!(context.flag, BudgetFlag::Unbudgeted);
    }

    #[test]
    fn prior_spend_reduces_remaining() {
        let context = classify(&request("Ops", 60.0, 1.0), &snapshot(), 150.0);
        assert_eq!(context.remaining_before_this_request, 50.0);
        assert_eq!(context.over_by(), 10.0);
    }

    #[test]
    fn negative_totals_are_never_over() {
        let context = classify(&request("Ops", -500.0, 1.0), &snapshot(), 0.0);
        assert_eq!(context.flag, BudgetFlag::WithinBudget);
    }

    proptest! {
        #[test]
        fn overage_is_never_negative(
            budget in -1.0e6f64..1.0e6,
            price in -1.0e4f64..1.0e4,
            amount in -100.0f64..100.0,
            already_spent in -1.0e6f64..1.0e6,
        ) {
            let snapshot = BudgetSnapshot {
                company_budget: 0.0,
                departments: vec![DepartmentBudget { department: "Ops".into(), budget }],
            };

            let context = classify(&request("Ops", price, amount), &snapshot, already_spent);

            prop_assert!(context.over_by() >= 0.0);
            prop_assert_eq!(
                context.is_over(),
                context.total > context.remaining_before_this_request
            );
        }
    }
}
