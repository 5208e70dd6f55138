//! Priority and team assignment

use crate::taxonomy::RequestType;
use crate::types::{Priority, RoutingDecision};

/// Team for any label without a dedicated team
pub const DEFAULT_TEAM: &str = "General Support Team";

/// Priority tier for a primary label. Unknown labels are `Low`.
#[must_use]
pub fn assign_priority(primary_request: &str) -> Priority {
    match RequestType::from_label(primary_request) {
        Some(RequestType::FraudReport) => Priority::High,
        Some(RequestType::LoanModification | RequestType::PaymentInquiry) => Priority::Medium,
        Some(RequestType::GeneralInquiry) | None => Priority::Low,
    }
}

/// Handling team for a primary label
#[must_use]
pub fn route_request(primary_request: &str) -> &'static str {
    match RequestType::from_label(primary_request) {
        Some(RequestType::LoanModification) => "Modification Team",
        Some(RequestType::PaymentInquiry) => "Payments Team",
        Some(RequestType::FraudReport) => "Fraud Team",
        Some(RequestType::GeneralInquiry) | None => DEFAULT_TEAM,
    }
}

/// Priority and team together
#[must_use]
pub fn route(primary_request: &str) -> RoutingDecision {
    RoutingDecision {
        priority: assign_priority(primary_request),
        assigned_team: route_request(primary_request).to_string(),
    }
}
