//! Error types for email triage

use thiserror::Error;

/// Errors that can occur while parsing the raw email
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to parse the email structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),
}

/// Errors raised by a format decoder.
///
/// These never leave the text extractor; their message is substituted for the
/// attachment text instead.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The PDF could not be read
    #[error("{0}")]
    Pdf(String),

    /// The DOCX container or its document XML could not be read
    #[error("{0}")]
    Docx(String),

    /// Plain text attachment is not valid UTF-8
    #[error("{0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors from the zero-shot classification capability
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The classification backend could not be reached or answered with an error status
    #[error("Classification request failed: {0}")]
    Request(String),

    /// The backend answered with a body that could not be understood
    #[error("Invalid classification response: {0}")]
    Response(String),

    /// No labels came back
    #[error("Classifier returned an empty ranking")]
    EmptyRanking,

    /// Labels and scores do not line up
    #[error("Classifier returned {labels} labels but {scores} scores")]
    LengthMismatch { labels: usize, scores: usize },

    /// A score outside `[0, 1]` or not a number
    #[error("Invalid score {score} for label {label}")]
    InvalidScore { label: String, score: f64 },
}

/// Invalid configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Failure of a whole triage invocation
#[derive(Error, Debug)]
pub enum TriageError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
