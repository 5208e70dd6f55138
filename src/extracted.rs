//! Structured field extraction from email and attachment text

use crate::types::NOT_AVAILABLE;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Labeled values pulled out of the combined text.
///
/// Every field is always present; a field whose pattern did not match holds `N/A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub deal_name: String,
    pub amount: String,
    pub expiration_date: String,
}

// Regex patterns
static DEAL_NAME_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"Deal Name: (.+)").unwrap());

static AMOUNT_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"Amount: \$?(\d+[,.\d]*)").unwrap());

static EXPIRATION_DATE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"Expiration Date: (\d{2}/\d{2}/\d{4})").unwrap());

impl ExtractedFields {
    /// Extract all fields from text content. First match wins per field.
    #[must_use]
    pub fn extract(text: &str) -> Self {
        Self {
            deal_name: first_capture(&DEAL_NAME_REGEX, text),
            amount: first_capture(&AMOUNT_REGEX, text),
            expiration_date: first_capture(&EXPIRATION_DATE_REGEX, text),
        }
    }

    /// Field values keyed by their wire names, in a fixed order
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("deal_name", self.deal_name.as_str()),
            ("amount", self.amount.as_str()),
            ("expiration_date", self.expiration_date.as_str()),
        ]
    }

    /// Number of fields that matched
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, value)| *value != NOT_AVAILABLE)
            .count()
    }
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            deal_name: NOT_AVAILABLE.into(),
            amount: NOT_AVAILABLE.into(),
            expiration_date: NOT_AVAILABLE.into(),
        }
    }
}

/// Scan `text` for the fixed field patterns
#[must_use]
pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields::extract(text)
}

fn first_capture(regex: &Regex, text: &str) -> String {
    regex
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.as_str().to_string())
}
