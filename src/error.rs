//! Error taxonomy for the potability pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the inference pipeline.
///
/// `ArtifactNotFound` is fatal at startup; the remaining variants are
/// per-request and reported to the user as plain messages. Nothing here
/// is retryable: every operation is local and deterministic.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The serialized (scaler, classifier) pair is missing or unreadable.
    /// Transient I/O failures are not distinguished from permanent absence.
    #[error("model artifact not found at '{}'", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// The artifact file exists but does not deserialize.
    #[error("model artifact at '{}' could not be parsed: {source}", path.display())]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Scaler, classifier and feature table disagree with each other.
    #[error("model artifact is inconsistent: {0}")]
    ArtifactMismatch(String),

    /// A feature vector of the wrong arity reached the scaler or classifier.
    #[error("feature vector has {got} values, model expects {expected}")]
    ShapeMismatch { expected: usize, got: usize },

    /// A measurement outside its declared bounds. Prevented structurally by
    /// the input form; kept as a typed error so validation stays explicit.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Input that does not parse as a number at all.
    #[error("'{raw}' is not a valid number for {field}")]
    InvalidNumber { field: &'static str, raw: String },
}
