//! Budget snapshot and per-request budget classification

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{LABEL_NO_BUDGET, LABEL_OVER_BUDGET_PREFIX, LABEL_WITHIN_BUDGET};
use crate::utils::currency::format_currency;

/// Configured ceiling for one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentBudget {
    pub department: String,
    pub budget: f64,
}

/// Company-wide ceiling plus per-department ceilings.
///
/// The default (zero ceiling, no departments) stands in for a missing
/// company record so views still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub company_budget: f64,
    #[serde(default)]
    pub departments: Vec<DepartmentBudget>,
}

impl BudgetSnapshot {
    /// Budget for `department` by exact, case-sensitive match. The first
    /// matching entry wins when upstream lists a department twice.
    pub fn department_budget(&self, department: &str) -> Option<f64> {
        self.departments
            .iter()
            .find(|entry| entry.department == department)
            .map(|entry| entry.budget)
    }
}

/// Company record as received from upstream, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBudgetSnapshot {
    pub company_budget: Value,
    pub departments: Value,
}

/// Where a request stands against its department's budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BudgetFlag {
    /// The department has no configured budget
    Unbudgeted,
    /// The request exceeds the remaining department budget
    Over { by: f64 },
    /// The request fits in the remaining department budget
    WithinBudget,
}

impl BudgetFlag {
    /// Status-flag label: `No Budget`, `Over by $50.00` or `Within Budget`.
    pub fn label(&self) -> String {
        match self {
            Self::Unbudgeted => LABEL_NO_BUDGET.to_string(),
            Self::Over { by } => format!("{LABEL_OVER_BUDGET_PREFIX} {}", format_currency(*by)),
            Self::WithinBudget => LABEL_WITHIN_BUDGET.to_string(),
        }
    }
}

/// Budget classification of a single request. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "BudgetContextWire")]
pub struct BudgetContext {
    pub department: String,
    pub total: f64,
    /// Department budget minus spend already counted against it; `0` when
    /// the department is unbudgeted
    pub remaining_before_this_request: f64,
    pub flag: BudgetFlag,
}

impl BudgetContext {
    /// `false` when the department has no configured budget.
    pub fn has_budget(&self) -> bool {
        !matches!(self.flag, BudgetFlag::Unbudgeted)
    }

    /// `true` when the request exceeds the remaining department budget.
    pub fn is_over(&self) -> bool {
        matches!(self.flag, BudgetFlag::Over { .. })
    }

    /// Overage amount; never negative.
    pub fn over_by(&self) -> f64 {
        match self.flag {
            BudgetFlag::Over { by } => by,
            BudgetFlag::Unbudgeted | BudgetFlag::WithinBudget => 0.0,
        }
    }

    /// Label of the underlying [`BudgetFlag`].
    pub fn label(&self) -> String {
        self.flag.label()
    }
}

/// Flattened JSON shape for the approval-list renderer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BudgetContextWire {
    department: String,
    total: f64,
    has_budget: bool,
    remaining_before_this_request: f64,
    is_over: bool,
    over_by: f64,
    flag: BudgetFlag,
    label: String,
}

impl From<BudgetContext> for BudgetContextWire {
    fn from(context: BudgetContext) -> Self {
        Self {
            has_budget: context.has_budget(),
            is_over: context.is_over(),
            over_by: context.over_by(),
            label: context.label(),
            department: context.department,
            total: context.total,
            remaining_before_this_request: context.remaining_before_this_request,
            flag: context.flag,
        }
    }
}
