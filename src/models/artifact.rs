//! Trained artifact loading
//!
//! The artifact is one JSON file holding the fitted scaler and classifier
//! together, so the pair can never drift apart across deployments. It is
//! loaded once at startup, validated, and held read-only for the life of
//! the process.

use crate::error::PipelineError;
use crate::models::forest::ForestClassifier;
use crate::models::scaler::StandardScaler;
use crate::types::sample::{feature_keys, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

fn default_decision_threshold() -> f64 {
    0.5
}

/// Co-versioned (scaler, classifier) pair with its feature-order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedArtifact {
    /// Feature names in the order the pair was fitted on
    pub feature_names: Vec<String>,
    /// Fitted standardization transform
    pub scaler: StandardScaler,
    /// Fitted binary classifier
    pub classifier: ForestClassifier,
    /// Probability of the potable class at or above which the label is
    /// "potable". Artifact-level concern; 0.5 when absent.
    #[serde(default = "default_decision_threshold")]
    pub decision_threshold: f64,
}

impl TrainedArtifact {
    /// Load and validate an artifact from a file.
    ///
    /// A missing or unreadable file maps to `ArtifactNotFound`; transient
    /// I/O errors are not distinguished from permanent absence, and there
    /// is no retry.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|_| PipelineError::ArtifactNotFound {
            path: path.to_path_buf(),
        })?;

        let artifact: Self =
            serde_json::from_str(&text).map_err(|source| PipelineError::ArtifactFormat {
                path: path.to_path_buf(),
                source,
            })?;

        artifact.validate()?;

        info!(
            path = %path.display(),
            trees = artifact.classifier.trees.len(),
            threshold = artifact.decision_threshold,
            "Trained artifact loaded"
        );

        Ok(artifact)
    }

    /// Cross-check the pieces of the artifact against each other and
    /// against the trained order the sample type exposes.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(PipelineError::ArtifactMismatch(format!(
                "artifact lists {} features, pipeline expects {}",
                self.feature_names.len(),
                FEATURE_COUNT
            )));
        }

        for (stored, expected) in self.feature_names.iter().zip(feature_keys()) {
            if stored != expected {
                return Err(PipelineError::ArtifactMismatch(format!(
                    "feature order mismatch: artifact has '{}' where pipeline expects '{}'",
                    stored, expected
                )));
            }
        }

        if self.scaler.feature_count() != FEATURE_COUNT || self.scaler.scale.len() != FEATURE_COUNT {
            return Err(PipelineError::ArtifactMismatch(format!(
                "scaler is fitted on {} features, pipeline expects {}",
                self.scaler.feature_count(),
                FEATURE_COUNT
            )));
        }

        if self.scaler.scale.iter().any(|&s| !(s > 0.0)) {
            return Err(PipelineError::ArtifactMismatch(
                "scaler has a non-positive scale component".to_string(),
            ));
        }

        if self.classifier.feature_count != FEATURE_COUNT {
            return Err(PipelineError::ArtifactMismatch(format!(
                "classifier is trained on {} features, pipeline expects {}",
                self.classifier.feature_count, FEATURE_COUNT
            )));
        }

        if self.classifier.trees.is_empty() {
            return Err(PipelineError::ArtifactMismatch(
                "classifier has no trees".to_string(),
            ));
        }

        for (i, tree) in self.classifier.trees.iter().enumerate() {
            if let Some(max) = tree.max_feature_index() {
                if max >= FEATURE_COUNT {
                    return Err(PipelineError::ArtifactMismatch(format!(
                        "tree {} references feature index {}, valid range is 0..{}",
                        i, max, FEATURE_COUNT
                    )));
                }
            }
            if !tree.leaves_populated() {
                return Err(PipelineError::ArtifactMismatch(format!(
                    "tree {} has a leaf with no training counts",
                    i
                )));
            }
        }

        if !(self.decision_threshold > 0.0 && self.decision_threshold < 1.0) {
            return Err(PipelineError::ArtifactMismatch(format!(
                "decision threshold {} is outside (0, 1)",
                self.decision_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forest::{DecisionTree, TreeNode};

    fn sample_artifact() -> TrainedArtifact {
        let tree = DecisionTree {
            root: TreeNode::Split {
                feature: 0,
                threshold: 0.0,
                left: Box::new(TreeNode::Leaf { counts: [8, 2] }),
                right: Box::new(TreeNode::Leaf { counts: [3, 7] }),
            },
        };
        TrainedArtifact {
            feature_names: feature_keys().iter().map(|k| k.to_string()).collect(),
            scaler: StandardScaler {
                mean: vec![7.0, 196.0, 22014.0, 7.1, 333.8, 426.2, 14.3, 66.4, 4.0],
                scale: vec![1.6, 32.9, 8768.6, 1.6, 41.4, 80.8, 3.3, 16.2, 0.78],
            },
            classifier: ForestClassifier {
                feature_count: FEATURE_COUNT,
                trees: vec![tree],
            },
            decision_threshold: 0.5,
        }
    }

    #[test]
    fn test_valid_artifact_passes() {
        assert!(sample_artifact().validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrainedArtifact::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, PipelineError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_feature_order_mismatch_rejected() {
        let mut artifact = sample_artifact();
        artifact.feature_names.swap(0, 1);
        assert!(matches!(
            artifact.validate(),
            Err(PipelineError::ArtifactMismatch(_))
        ));
    }

    #[test]
    fn test_scaler_arity_mismatch_rejected() {
        let mut artifact = sample_artifact();
        artifact.scaler.mean.pop();
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_out_of_range_tree_feature_rejected() {
        let mut artifact = sample_artifact();
        artifact.classifier.trees[0].root = TreeNode::Split {
            feature: FEATURE_COUNT,
            threshold: 0.0,
            left: Box::new(TreeNode::Leaf { counts: [1, 1] }),
            right: Box::new(TreeNode::Leaf { counts: [1, 1] }),
        };
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let mut artifact = sample_artifact();
        artifact.decision_threshold = 1.0;
        assert!(artifact.validate().is_err());
    }

    #[test]
    fn test_artifact_roundtrip() {
        let artifact = sample_artifact();
        let json = serde_json::to_string(&artifact).unwrap();
        let loaded: TrainedArtifact = serde_json::from_str(&json).unwrap();
        assert!(loaded.validate().is_ok());
        assert_eq!(loaded.feature_names, artifact.feature_names);
    }
}
