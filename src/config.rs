//! Classification backend configuration

use crate::error::ConfigError;
use secrecy::SecretString;
use std::time::Duration;

/// Default zero-shot endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";

const ENDPOINT_VAR: &str = "TRIAGE_CLASSIFIER_URL";
const TOKEN_VAR: &str = "TRIAGE_CLASSIFIER_TOKEN";
const FALLBACK_TOKEN_VAR: &str = "HF_TOKEN";
const TIMEOUT_VAR: &str = "TRIAGE_CLASSIFIER_TIMEOUT_SECS";

/// Settings for the hosted zero-shot classifier
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Inference endpoint receiving the classification request
    pub endpoint: String,
    /// Bearer token, if the endpoint requires one
    pub api_token: Option<SecretString>,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            timeout: None,
        }
    }
}

impl ClassifierConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = non_empty(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let api_token = non_empty(TOKEN_VAR)
            .or_else(|| non_empty(FALLBACK_TOKEN_VAR))
            .map(SecretString::from);

        let timeout = non_empty(TIMEOUT_VAR)
            .map(|raw| parse_timeout(TIMEOUT_VAR, &raw))
            .transpose()?;

        Ok(Self {
            endpoint,
            api_token,
            timeout,
        })
    }
}

/// Parse a whole number of seconds
pub fn parse_timeout(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{raw:?} is not a number of seconds: {e}"),
        })
}
