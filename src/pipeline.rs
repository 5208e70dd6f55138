//! End-to-end triage of one raw email

use crate::classifier::{TaxonomyClassifier, ZeroShotClassifier};
use crate::dedup::{ContentStore, Deduplicator, InMemoryStore};
use crate::error::Result;
use crate::extracted::ExtractedFields;
use crate::parser::parse_email;
use crate::routing;
use crate::types::TriageReport;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Runs parsing, extraction, classification, deduplication and routing.
///
/// Cheap to clone; clones share the same deduplication state.
pub struct TriagePipeline<S = InMemoryStore> {
    classifier: TaxonomyClassifier,
    dedup: Arc<Deduplicator<S>>,
}

impl TriagePipeline<InMemoryStore> {
    /// Pipeline with a fresh, empty seen-content set
    #[must_use]
    pub fn new(backend: Arc<dyn ZeroShotClassifier>) -> Self {
        Self::with_deduplicator(backend, Arc::new(Deduplicator::new()))
    }
}

impl<S> Clone for TriagePipeline<S> {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            dedup: Arc::clone(&self.dedup),
        }
    }
}

impl<S> fmt::Debug for TriagePipeline<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriagePipeline")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl<S: ContentStore> TriagePipeline<S> {
    /// Pipeline sharing an existing seen-content set, backed by any store
    #[must_use]
    pub fn with_deduplicator(
        backend: Arc<dyn ZeroShotClassifier>,
        dedup: Arc<Deduplicator<S>>,
    ) -> Self {
        Self {
            classifier: TaxonomyClassifier::new(backend),
            dedup,
        }
    }

    #[must_use]
    pub fn deduplicator(&self) -> &Deduplicator<S> {
        &self.dedup
    }

    /// Triage one raw RFC 5322 message.
    ///
    /// Fails only when the message cannot be parsed or the classifier fails.
    /// Unreadable attachments are reported inline in the extracted text.
    pub fn process(&self, raw: &[u8]) -> Result<TriageReport> {
        let email = parse_email(raw)?;

        let attachment_texts: Vec<String> = email
            .attachments
            .iter()
            .map(crate::types::Attachment::extracted_text)
            .collect();
        let attachment_text = attachment_texts.join("\n");

        let full_text = std::iter::once(email.body.as_str())
            .chain(attachment_texts.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n");

        let extracted_fields = ExtractedFields::extract(&full_text);
        let classification = self.classifier.classify(&email.body, &attachment_text)?;
        let duplicate = self.dedup.is_duplicate(&email.body);
        let routing = routing::route(&classification.primary_request);

        info!(
            subject = email.subject.as_deref().unwrap_or("(no subject)"),
            attachments = ?email.attachment_names(),
            primary_request = %classification.primary_request,
            sub_request = %classification.sub_request,
            priority = %routing.priority,
            team = %routing.assigned_team,
            duplicate = duplicate.is_duplicate,
            fields_found = extracted_fields.found_count(),
            "Triaged email"
        );

        Ok(TriageReport {
            classification,
            extracted_fields,
            duplicate,
            routing,
        })
    }
}
