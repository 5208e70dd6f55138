use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use request_triage::{ClassifierConfig, HuggingFaceClassifier, TriagePipeline};

/// Triage one inbound email and print its routing decision as JSON.
#[derive(Debug, Parser)]
#[command(name = "request-triage", version, about)]
struct Cli {
    /// Raw RFC 5322 message (.eml)
    file: PathBuf,

    /// Zero-shot classification endpoint (overrides TRIAGE_CLASSIFIER_URL)
    #[arg(long)]
    endpoint: Option<String>,

    /// Classifier request timeout in seconds (overrides TRIAGE_CLASSIFIER_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(file = %cli.file.display(), "Triage failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = ClassifierConfig::from_env()?;
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Some(Duration::from_secs(secs));
    }

    let classifier = HuggingFaceClassifier::new(config)?;
    tracing::debug!(endpoint = classifier.endpoint(), "Classifier ready");
    let pipeline = TriagePipeline::new(Arc::new(classifier));

    let raw = std::fs::read(&cli.file)?;
    let report = pipeline.process(&raw)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}
