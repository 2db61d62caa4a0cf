//! Request fixtures for unit tests.

use chrono::{DateTime, Utc};
use mountview_domain::{Request, RequestStatus, Timestamp};

pub(crate) struct RequestFixture(Request);

impl RequestFixture {
    pub(crate) fn new(request_id: &str) -> Self {
        Self(Request {
            request_id: request_id.to_string(),
            name: "Dana Whitfield".to_string(),
            department: "Ops".to_string(),
            item_name: "Standing desk".to_string(),
            item_price: 0.0,
            item_amount: 1.0,
            status: RequestStatus::Pending,
            requested_at: Timestamp::Missing,
            created_at: Timestamp::Missing,
            updated_at: Timestamp::Missing,
            decision_at: Timestamp::Missing,
        })
    }

    pub(crate) fn department(mut self, department: &str) -> Self {
        self.0.department = department.to_string();
        self
    }

    pub(crate) fn priced(mut self, price: f64, amount: f64) -> Self {
        self.0.item_price = price;
        self.0.item_amount = amount;
        self
    }

    pub(crate) fn total(self, total: f64) -> Self {
        self.priced(total, 1.0)
    }

    pub(crate) fn status(mut self, status: RequestStatus) -> Self {
        self.0.status = status;
        self
    }

    pub(crate) fn approved(self) -> Self {
        self.status(RequestStatus::Approved)
    }

    pub(crate) fn rejected(self) -> Self {
        self.status(RequestStatus::Rejected)
    }

    pub(crate) fn requested(mut self, raw: &str) -> Self {
        self.0.requested_at = Timestamp::parse(raw);
        self
    }

    pub(crate) fn created(mut self, raw: &str) -> Self {
        self.0.created_at = Timestamp::parse(raw);
        self
    }

    pub(crate) fn updated(mut self, raw: &str) -> Self {
        self.0.updated_at = Timestamp::parse(raw);
        self
    }

    pub(crate) fn decided(mut self, raw: &str) -> Self {
        self.0.decision_at = Timestamp::parse(raw);
        self
    }

    pub(crate) fn build(self) -> Request {
        self.0
    }
}

pub(crate) fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}
