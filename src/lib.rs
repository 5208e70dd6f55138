// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! Inbound Request Triage
//!
//! Turns a raw inbound email into routing metadata for a back-office intake
//! queue.
//!
//! # Pipeline
//!
//! - Parse the message into a body and its named attachments
//! - Extract text from PDF, DOCX and plain text attachments
//! - Pull labeled fields (deal name, amount, expiration date)
//! - Classify into a primary request type and a sub-request with a
//!   zero-shot classifier
//! - Flag bodies already seen by this process
//! - Assign a priority tier and a handling team
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use request_triage::{ClassifierConfig, HuggingFaceClassifier, TriagePipeline};
//!
//! let classifier = HuggingFaceClassifier::new(ClassifierConfig::from_env()?)?;
//! let pipeline = TriagePipeline::new(Arc::new(classifier));
//!
//! let raw = std::fs::read("request.eml")?;
//! let report = pipeline.process(&raw)?;
//!
//! println!("{} -> {}", report.classification.primary_request, report.routing.assigned_team);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod classifier;
mod config;
mod dedup;
mod error;
mod extract;
mod extracted;
mod huggingface;
mod parser;
mod pipeline;
mod routing;
mod taxonomy;
mod types;

pub use classifier::{ScoredLabel, TaxonomyClassifier, ZeroShotClassifier, rank};
pub use config::{ClassifierConfig, DEFAULT_ENDPOINT};
pub use dedup::{ContentStore, DUPLICATE_REASON, Deduplicator, InMemoryStore, UNIQUE_REASON};
pub use error::{ClassifyError, ConfigError, ExtractError, ParseError, Result, TriageError};
pub use extract::{FileFormat, extract_text};
pub use extracted::{ExtractedFields, extract_fields};
pub use huggingface::HuggingFaceClassifier;
pub use parser::parse_email;
pub use pipeline::TriagePipeline;
pub use routing::{DEFAULT_TEAM, assign_priority, route, route_request};
pub use taxonomy::{DEFAULT_REASONING, RequestType, reasoning_for, sub_labels_for};
pub use types::*;
