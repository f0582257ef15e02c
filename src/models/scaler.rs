//! Standard-score feature scaling

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Fitted standardization transform: `(x - mean) / scale` per feature.
///
/// Stateless after fit; the mean and scale vectors come from the training
/// distribution and are loaded as part of the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature training mean
    pub mean: Vec<f64>,
    /// Per-feature training standard deviation, all strictly positive
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted on
    pub fn feature_count(&self) -> usize {
        self.mean.len()
    }

    /// Normalize a raw feature vector.
    ///
    /// Rejects vectors whose arity does not match the fitted transform
    /// instead of silently coercing them.
    pub fn transform(&self, raw: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if raw.len() != self.mean.len() {
            return Err(PipelineError::ShapeMismatch {
                expected: self.mean.len(),
                got: raw.len(),
            });
        }

        Ok(raw
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![7.0, 200.0, 20000.0],
            scale: vec![1.0, 50.0, 10000.0],
        }
    }

    #[test]
    fn test_transform_standardizes() {
        let scaled = scaler().transform(&[8.0, 150.0, 20000.0]).unwrap();
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        assert!((scaled[1] + 1.0).abs() < 1e-12);
        assert!(scaled[2].abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let s = scaler();
        let a = s.transform(&[7.5, 180.0, 25000.0]).unwrap();
        let b = s.transform(&[7.5, 180.0, 25000.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_transform_rejects_wrong_arity() {
        let err = scaler().transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ShapeMismatch {
                expected: 3,
                got: 2
            }
        ));
    }
}
