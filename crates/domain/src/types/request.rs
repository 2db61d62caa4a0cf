//! Purchase requests
//!
//! [`RawRequest`] is a row exactly as the spreadsheet proxy returns it; every
//! field is an untyped JSON value. [`Request`] is the canonical shape the
//! engine works with, produced by the normaliser in `mountview-core`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::timestamp::Timestamp;
use crate::impl_wire_enum_conversions;

/// Approval status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl_wire_enum_conversions!(RequestStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
});

impl RequestStatus {
    /// Capitalised label for status pills (`Pending`, `Approved`, `Rejected`).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Approved or rejected.
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// A request row as received from upstream.
///
/// Unknown columns are ignored and absent columns are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRequest {
    pub request_id: Value,
    pub name: Value,
    pub department: Value,
    pub item_name: Value,
    pub item_price: Value,
    pub item_amount: Value,
    pub status: Value,
    pub requested_at: Value,
    pub created_at: Value,
    pub updated_at: Value,
    pub decision_at: Value,
}

/// A normalised purchase request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub request_id: String,
    pub name: String,
    pub department: String,
    pub item_name: String,
    /// Unit price in dollars; may be negative, never NaN
    pub item_price: f64,
    /// Quantity; may be fractional or negative, never NaN
    pub item_amount: f64,
    pub status: RequestStatus,
    #[serde(default)]
    pub requested_at: Timestamp,
    #[serde(default)]
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Timestamp,
    #[serde(default)]
    pub decision_at: Timestamp,
}

impl Request {
    /// `item_price * item_amount`. Always recomputed, never stored.
    pub fn total(&self) -> f64 {
        self.item_price * self.item_amount
    }
}
