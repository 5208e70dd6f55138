//! Attachment text extraction
//!
//! Dispatches on the declared file name suffix. Decoding failures are turned
//! into descriptive text so one bad attachment never aborts a request.

mod docx;
mod pdf;

use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{debug, warn};

/// Attachment formats with a text decoder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FileFormat {
    Pdf,
    Docx,
    Text,
    Unsupported,
}

impl FileFormat {
    /// Detect the format from a file name suffix. Case-sensitive, like the
    /// name the sender declared.
    #[must_use]
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".pdf") {
            Self::Pdf
        } else if file_name.ends_with(".docx") {
            Self::Docx
        } else if file_name.ends_with(".txt") {
            Self::Text
        } else {
            Self::Unsupported
        }
    }

    /// Decode `raw` into plain text, surfacing decoder failures
    pub fn read_text(self, raw: &[u8]) -> Result<String, ExtractError> {
        match self {
            Self::Pdf => pdf::read_text(raw),
            Self::Docx => docx::read_text(raw),
            Self::Text => Ok(String::from_utf8(raw.to_vec())?),
            Self::Unsupported => Ok(String::new()),
        }
    }
}

/// Extract plain text from one attachment.
///
/// Unsupported suffixes yield an empty string. A decoding failure yields
/// `Error reading attachment <file_name>: <message>`.
#[must_use]
pub fn extract_text(file_name: &str, raw: &[u8]) -> String {
    let format = FileFormat::from_file_name(file_name);

    match format.read_text(raw) {
        Ok(text) => {
            debug!(file_name, ?format, chars = text.len(), "Extracted attachment text");
            text
        }
        Err(e) => unreadable_text(file_name, &e),
    }
}

/// Text substituted for an attachment that could not be read
pub(crate) fn unreadable_text(file_name: &str, error: &dyn Display) -> String {
    warn!(file_name, error = %error, "Could not read attachment");
    format!("Error reading attachment {file_name}: {error}")
}
