//! Two-level request classification on top of a zero-shot classifier

use crate::error::ClassifyError;
use crate::taxonomy::{self, RequestType};
use crate::types::{ClassificationResult, NOT_AVAILABLE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// A candidate label and the score the classifier gave it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f64,
}

impl ScoredLabel {
    #[must_use]
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Zero-shot text classification capability.
///
/// Given a text and a set of candidate labels, returns each label with a score
/// in `[0, 1]`. Implementations are expected to be synchronous and free of side
/// effects visible to the caller. They are not required to sort their answer;
/// [`rank`] establishes the order.
pub trait ZeroShotClassifier: Send + Sync {
    fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Vec<ScoredLabel>, ClassifyError>;
}

/// Validate a classifier answer and order it best first.
///
/// Scores must be finite and within `[0, 1]`. The sort is stable, so labels
/// with equal scores keep the order the classifier returned them in.
pub fn rank(mut scored: Vec<ScoredLabel>) -> Result<Vec<ScoredLabel>, ClassifyError> {
    if scored.is_empty() {
        return Err(ClassifyError::EmptyRanking);
    }

    if let Some(bad) = scored
        .iter()
        .find(|s| !s.score.is_finite() || !(0.0..=1.0).contains(&s.score))
    {
        return Err(ClassifyError::InvalidScore {
            label: bad.label.clone(),
            score: bad.score,
        });
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(scored)
}

/// Classifies requests into the primary/sub-request taxonomy
#[derive(Clone)]
pub struct TaxonomyClassifier {
    backend: Arc<dyn ZeroShotClassifier>,
}

impl TaxonomyClassifier {
    #[must_use]
    pub fn new(backend: Arc<dyn ZeroShotClassifier>) -> Self {
        Self { backend }
    }

    /// Classify an email body together with its attachment text
    pub fn classify(
        &self,
        email_body: &str,
        attachment_text: &str,
    ) -> Result<ClassificationResult, ClassifyError> {
        let combined = format!("{email_body} {attachment_text}");

        let primary = self.top_label(&combined, &RequestType::primary_labels())?;

        let sub_labels = taxonomy::sub_labels_for(&primary.label);
        let sub_request = if sub_labels.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            self.top_label(&combined, sub_labels)?.label
        };

        debug!(
            primary = %primary.label,
            confidence = primary.score,
            sub_request = %sub_request,
            "Classified request"
        );

        Ok(ClassificationResult {
            reasoning: taxonomy::reasoning_for(&primary.label).to_string(),
            primary_request: primary.label,
            sub_request,
            confidence: primary.score,
        })
    }

    fn top_label(&self, text: &str, labels: &[&str]) -> Result<ScoredLabel, ClassifyError> {
        rank(self.backend.classify(text, labels)?)?
            .into_iter()
            .next()
            .ok_or(ClassifyError::EmptyRanking)
    }
}

impl std::fmt::Debug for TaxonomyClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxonomyClassifier").finish_non_exhaustive()
    }
}
