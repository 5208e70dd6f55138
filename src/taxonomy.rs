//! The fixed two-level request taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reasoning used for any label outside the taxonomy
pub const DEFAULT_REASONING: &str = "No specific reasoning available.";

/// Primary request categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RequestType {
    #[serde(rename = "Loan Modification")]
    LoanModification,
    #[serde(rename = "Payment Inquiry")]
    PaymentInquiry,
    #[serde(rename = "Fraud Report")]
    FraudReport,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl RequestType {
    /// All primary categories, in the order they are offered to the classifier
    pub const ALL: [Self; 4] = [
        Self::LoanModification,
        Self::PaymentInquiry,
        Self::FraudReport,
        Self::GeneralInquiry,
    ];

    /// Look up a category by its exact label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoanModification => "Loan Modification",
            Self::PaymentInquiry => "Payment Inquiry",
            Self::FraudReport => "Fraud Report",
            Self::GeneralInquiry => "General Inquiry",
        }
    }

    /// Candidate sub-request labels for this category
    #[must_use]
    pub const fn sub_labels(self) -> &'static [&'static str] {
        match self {
            Self::LoanModification => &["Interest Rate Change", "Term Extension"],
            Self::PaymentInquiry => &["Payment Status", "Payment Method Change"],
            Self::FraudReport => &["Unauthorized Transaction", "Identity Theft"],
            Self::GeneralInquiry => &["Product Information", "Account Details"],
        }
    }

    #[must_use]
    pub const fn reasoning(self) -> &'static str {
        match self {
            Self::LoanModification => "Customer requests a change in loan terms.",
            Self::PaymentInquiry => "Customer seeks details on payments.",
            Self::FraudReport => "Customer reports suspicious activity.",
            Self::GeneralInquiry => "General customer query.",
        }
    }

    /// Labels of all primary categories
    #[must_use]
    pub fn primary_labels() -> [&'static str; 4] {
        Self::ALL.map(Self::label)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canned rationale for a primary label
#[must_use]
pub fn reasoning_for(label: &str) -> &'static str {
    RequestType::from_label(label).map_or(DEFAULT_REASONING, RequestType::reasoning)
}

/// Sub-labels configured for a primary label; empty for unknown labels
#[must_use]
pub fn sub_labels_for(label: &str) -> &'static [&'static str] {
    match RequestType::from_label(label) {
        Some(request_type) => request_type.sub_labels(),
        None => &[],
    }
}
