//! Inference engine: scale, classify, decide

use crate::error::PipelineError;
use crate::models::artifact::TrainedArtifact;
use crate::types::sample::WaterSample;
use crate::types::verdict::{Potability, PotabilityVerdict};
use tracing::debug;

/// Result of one inference call
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Predicted label
    pub label: Potability,
    /// Class probabilities as `[p_not_potable, p_potable]`, summing to 1
    pub probabilities: [f64; 2],
}

impl PredictionResult {
    /// Probability mass assigned to the predicted label
    pub fn confidence(&self) -> f64 {
        self.probabilities[self.label.class_index()]
    }

    /// Convert the result to a displayable verdict
    pub fn to_verdict(&self) -> PotabilityVerdict {
        PotabilityVerdict::new(self.label, self.probabilities)
    }
}

/// Runs samples through the loaded (scaler, classifier) pair.
///
/// The artifact is an explicit immutable dependency injected at
/// construction; the engine holds no other state and every call is
/// deterministic for a fixed artifact and sample.
#[derive(Debug)]
pub struct InferenceEngine {
    artifact: TrainedArtifact,
}

impl InferenceEngine {
    /// Create an engine around an already-loaded artifact
    pub fn new(artifact: TrainedArtifact) -> Self {
        Self { artifact }
    }

    /// Load the artifact from a file and build an engine around it
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PipelineError> {
        Ok(Self::new(TrainedArtifact::load(path)?))
    }

    /// Number of features the loaded pair expects
    pub fn feature_count(&self) -> usize {
        self.artifact.classifier.feature_count
    }

    /// Decision threshold applied to the potable-class probability
    pub fn decision_threshold(&self) -> f64 {
        self.artifact.decision_threshold
    }

    /// Run one sample through the full pipeline: pack the measurements in
    /// the trained order, normalize, classify, then apply the artifact's
    /// decision threshold to pick the label.
    pub fn infer(&self, sample: &WaterSample) -> Result<PredictionResult, PipelineError> {
        let raw = sample.to_features();
        let scaled = self.artifact.scaler.transform(&raw)?;
        let probabilities = self.artifact.classifier.predict_proba(&scaled)?;

        let label = if probabilities[1] >= self.artifact.decision_threshold {
            Potability::Potable
        } else {
            Potability::NotPotable
        };

        debug!(
            label = ?label,
            p_not_potable = probabilities[0],
            p_potable = probabilities[1],
            "Inference complete"
        );

        Ok(PredictionResult {
            label,
            probabilities,
        })
    }
}
