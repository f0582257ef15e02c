//! Water Potability Pipeline Library
//!
//! Collects nine water-quality measurements, runs them through a
//! pre-trained (scaler, classifier) pair, and produces a potability
//! verdict with a confidence score. One artifact load at startup, one
//! synchronous inference cycle per analysis.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod presenter;
pub mod types;

pub use config::AppConfig;
pub use error::PipelineError;
pub use form::InputForm;
pub use models::artifact::TrainedArtifact;
pub use models::inference::{InferenceEngine, PredictionResult};
pub use types::{sample::WaterSample, verdict::Potability, verdict::PotabilityVerdict};
