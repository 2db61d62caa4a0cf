//! Approved/denied aggregation

use mountview_domain::{Request, RequestStatus, Summary};

/// Count and total approved and rejected requests; pending ones are skipped.
pub fn aggregate(requests: &[Request]) -> Summary {
    requests.iter().fold(Summary::default(), |mut summary, request| {
        match request.status {
            RequestStatus::Approved => {
                summary.approved_count += 1;
                summary.approved_total += request.total();
            }
            RequestStatus::Rejected => {
                summary.denied_count += 1;
                summary.denied_total += request.total();
            }
            RequestStatus::Pending => {}
        }
        summary
    })
}
