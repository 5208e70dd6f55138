//! Core types for parsed emails and triage results

use crate::extract;
use crate::extracted::ExtractedFields;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value used for any field or label that could not be determined
pub const NOT_AVAILABLE: &str = "N/A";

/// A parsed inbound email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Email {
    /// Body text, plain text preferred over HTML
    pub body: String,

    /// Attachments in the order they appear in the message
    pub attachments: Vec<Attachment>,

    /// Subject header, if present
    pub subject: Option<String>,

    /// From header as written, if present
    pub from: Option<String>,

    /// Date header, if present and parseable
    pub date: Option<DateTime<Utc>>,
}

impl Email {
    /// File names of all attachments, in order
    #[must_use]
    pub fn attachment_names(&self) -> Vec<&str> {
        self.attachments.iter().map(|a| a.file_name.as_str()).collect()
    }
}

/// A named attachment with its transfer-decoded bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// File name as declared by the sender
    pub file_name: String,

    /// Declared MIME type
    pub content_type: String,

    /// Decoded content, empty when the transfer encoding was broken
    #[serde(skip)]
    pub raw_content: Vec<u8>,

    /// Why the transfer encoding could not be decoded
    #[serde(skip)]
    pub decode_error: Option<String>,
}

impl Attachment {
    #[must_use]
    pub fn new(file_name: impl Into<String>, raw_content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: "application/octet-stream".into(),
            raw_content: raw_content.into(),
            decode_error: None,
        }
    }

    /// Plain text of this attachment.
    ///
    /// Never fails: unsupported formats give an empty string, and unreadable
    /// files or broken transfer encodings give an error description.
    #[must_use]
    pub fn extracted_text(&self) -> String {
        match &self.decode_error {
            Some(error) => extract::unreadable_text(&self.file_name, error),
            None => extract::extract_text(&self.file_name, &self.raw_content),
        }
    }
}

/// Outcome of the two-level classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary_request: String,

    /// Finer category, or `N/A` when the primary label has no sub-labels
    #[serde(rename = "sub_request_type")]
    pub sub_request: String,

    /// Score of the primary label, in `[0, 1]`
    pub confidence: f64,

    pub reasoning: String,
}

/// Whether the body was already seen by this process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateStatus {
    #[serde(rename = "duplicate_indicator")]
    pub is_duplicate: bool,

    #[serde(rename = "duplicate_reason")]
    pub reason: String,
}

/// Handling priority tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the request goes and how urgently
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub priority: Priority,
    pub assigned_team: String,
}

/// Everything the pipeline decides about one email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    #[serde(flatten)]
    pub classification: ClassificationResult,

    pub extracted_fields: ExtractedFields,

    #[serde(flatten)]
    pub duplicate: DuplicateStatus,

    #[serde(flatten)]
    pub routing: RoutingDecision,
}
