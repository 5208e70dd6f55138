//! Zero-shot classification over the Hugging Face inference API

use crate::classifier::{ScoredLabel, ZeroShotClassifier};
use crate::config::ClassifierConfig;
use crate::error::ClassifyError;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
    multi_label: bool,
}

/// The endpoint answers either in columns or as label/score pairs
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Columns { labels: Vec<String>, scores: Vec<f64> },
    Pairs(Vec<ScoredLabel>),
}

impl ZeroShotResponse {
    fn into_scored(self) -> Result<Vec<ScoredLabel>, ClassifyError> {
        match self {
            Self::Columns { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(ClassifyError::LengthMismatch {
                        labels: labels.len(),
                        scores: scores.len(),
                    });
                }
                Ok(labels
                    .into_iter()
                    .zip(scores)
                    .map(|(label, score)| ScoredLabel { label, score })
                    .collect())
            }
            Self::Pairs(pairs) => Ok(pairs),
        }
    }
}

/// Blocking client for a hosted zero-shot classification model
#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    client: reqwest::blocking::Client,
    config: ClassifierConfig,
}

impl HuggingFaceClassifier {
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifyError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl ZeroShotClassifier for HuggingFaceClassifier {
    fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Vec<ScoredLabel>, ClassifyError> {
        let body = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels,
                multi_label: false,
            },
        };

        let mut request = self.client.post(&self.config.endpoint).json(&body);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token.expose_secret());
        }

        debug!(
            endpoint = %self.config.endpoint,
            labels = candidate_labels.len(),
            "Sending zero-shot request"
        );

        let response = request
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| ClassifyError::Request(e.to_string()))?;

        let text = response
            .text()
            .map_err(|e| ClassifyError::Response(e.to_string()))?;

        parse_response(&text)
    }
}

fn parse_response(body: &str) -> Result<Vec<ScoredLabel>, ClassifyError> {
    serde_json::from_str::<ZeroShotResponse>(body)
        .map_err(|e| ClassifyError::Response(e.to_string()))?
        .into_scored()
}
