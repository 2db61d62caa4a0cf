//! Approved/denied totals

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::utils::currency::format_currency;

/// Counts and currency totals of decided requests. Pending requests are in
/// neither bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub approved_count: usize,
    pub approved_total: f64,
    pub denied_count: usize,
    pub denied_total: f64,
}

impl Summary {
    /// `Approved: 2 ($350.00) | Denied: 1 ($20.00)`
    pub fn headline(&self) -> String {
        format!(
            "Approved: {} ({}) | Denied: {} ({})",
            self.approved_count,
            format_currency(self.approved_total),
            self.denied_count,
            format_currency(self.denied_total)
        )
    }
}
