//! Water Potability Predictor - Main Entry Point
//!
//! Loads the trained (scaler, classifier) artifact once, then runs the
//! collect -> assemble -> scale -> classify -> present cycle for each
//! sample the user enters.

use anyhow::Result;
use potability_pipeline::{
    config::AppConfig, error::PipelineError, form::InputForm, models::inference::InferenceEngine,
    presenter,
};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("potability_pipeline=info".parse()?),
        )
        .init();

    info!("Starting Water Potability Predictor");

    // Load configuration; defaults cover a missing file
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Configuration not loaded, using defaults");
            AppConfig::default()
        }
    };

    // Load the artifact before any input is accepted; without it no
    // request can be served.
    let engine = match InferenceEngine::from_file(&config.artifact.path) {
        Ok(engine) => engine,
        Err(err @ PipelineError::ArtifactNotFound { .. }) => {
            presenter::print_error(&err.to_string());
            presenter::print_error(
                "Place the trained model at the configured path and restart the application.",
            );
            std::process::exit(1);
        }
        Err(err) => {
            presenter::print_error(&err.to_string());
            std::process::exit(1);
        }
    };

    info!(
        features = engine.feature_count(),
        threshold = engine.decision_threshold(),
        "Inference engine ready"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    presenter::print_header(&mut out)?;
    run_session(&engine, &mut input, &mut out)?;

    info!("Shutting down");
    Ok(())
}

/// Run analysis cycles until the user stops or input ends
fn run_session<R: BufRead, W: Write>(
    engine: &InferenceEngine,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let Some(sample) = InputForm::collect(input, out)? else {
            break;
        };

        match engine.infer(&sample) {
            Ok(result) => {
                let verdict = result.to_verdict();
                info!(
                    label = ?verdict.label,
                    confidence = verdict.confidence,
                    "Analysis complete"
                );
                presenter::render(&verdict, out)?;
            }
            Err(e) => {
                error!(error = %e, "Inference failed");
                presenter::print_error(&e.to_string());
            }
        }

        if !InputForm::ask_again(input, out)? {
            break;
        }
    }
    Ok(())
}
