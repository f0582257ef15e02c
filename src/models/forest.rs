//! Serialized random-forest binary classifier

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// One node of a fitted decision tree.
///
/// Splits route `feature <= threshold` to the left child; leaves hold the
/// per-class training counts seen at that leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        counts: [u64; 2],
    },
}

/// A single fitted decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub root: TreeNode,
}

impl DecisionTree {
    /// Walk the tree and return the normalized class distribution at the
    /// reached leaf as `[p_not_potable, p_potable]`.
    fn class_distribution(&self, features: &[f64]) -> Result<[f64; 2], PipelineError> {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features.get(*feature).ok_or(PipelineError::ShapeMismatch {
                        expected: *feature + 1,
                        got: features.len(),
                    })?;
                    node = if *value <= *threshold { left } else { right };
                }
                TreeNode::Leaf { counts } => {
                    let total = counts[0] + counts[1];
                    if total == 0 {
                        return Err(PipelineError::ArtifactMismatch(
                            "tree leaf has no training counts".to_string(),
                        ));
                    }
                    return Ok([
                        counts[0] as f64 / total as f64,
                        counts[1] as f64 / total as f64,
                    ]);
                }
            }
        }
    }

    /// Highest feature index referenced anywhere in the tree
    pub fn max_feature_index(&self) -> Option<usize> {
        fn walk(node: &TreeNode) -> Option<usize> {
            match node {
                TreeNode::Leaf { .. } => None,
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    let below = walk(left).max(walk(right));
                    Some(below.map_or(*feature, |b| b.max(*feature)))
                }
            }
        }
        walk(&self.root)
    }

    /// Check that every leaf carries at least one training count
    pub fn leaves_populated(&self) -> bool {
        fn walk(node: &TreeNode) -> bool {
            match node {
                TreeNode::Leaf { counts } => counts[0] + counts[1] > 0,
                TreeNode::Split { left, right, .. } => walk(left) && walk(right),
            }
        }
        walk(&self.root)
    }
}

/// Fitted random-forest classifier over normalized feature vectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestClassifier {
    /// Arity the trees were trained on
    pub feature_count: usize,
    /// Fitted trees; probabilities are averaged across them
    pub trees: Vec<DecisionTree>,
}

impl ForestClassifier {
    /// Predict the class-probability pair `[p_not_potable, p_potable]`.
    ///
    /// Deterministic for a fixed forest and input. The pair sums to 1
    /// within floating-point tolerance since each tree contributes a
    /// normalized distribution.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PipelineError> {
        if features.len() != self.feature_count {
            return Err(PipelineError::ShapeMismatch {
                expected: self.feature_count,
                got: features.len(),
            });
        }
        if self.trees.is_empty() {
            return Err(PipelineError::ArtifactMismatch(
                "classifier has no trees".to_string(),
            ));
        }

        let mut sum = [0.0; 2];
        for tree in &self.trees {
            let dist = tree.class_distribution(features)?;
            sum[0] += dist[0];
            sum[1] += dist[1];
        }

        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n0: u64, n1: u64) -> TreeNode {
        TreeNode::Leaf { counts: [n0, n1] }
    }

    fn stump(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> DecisionTree {
        DecisionTree {
            root: TreeNode::Split {
                feature,
                threshold,
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    fn forest() -> ForestClassifier {
        ForestClassifier {
            feature_count: 2,
            trees: vec![
                stump(0, 0.0, leaf(9, 1), leaf(2, 8)),
                stump(1, 0.5, leaf(6, 4), leaf(3, 7)),
            ],
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let probs = forest().predict_proba(&[1.0, 0.0]).unwrap();
        assert!((probs[0] + probs[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_averages_tree_distributions() {
        // First tree routes right (0.2/0.8), second left (0.6/0.4)
        let probs = forest().predict_proba(&[1.0, 0.0]).unwrap();
        assert!((probs[0] - 0.4).abs() < 1e-12);
        assert!((probs[1] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_split_boundary_goes_left() {
        let tree = stump(0, 0.0, leaf(10, 0), leaf(0, 10));
        let f = ForestClassifier {
            feature_count: 1,
            trees: vec![tree],
        };
        let probs = f.predict_proba(&[0.0]).unwrap();
        assert_eq!(probs, [1.0, 0.0]);
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let f = forest();
        let a = f.predict_proba(&[0.3, 0.7]).unwrap();
        let b = f.predict_proba(&[0.3, 0.7]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let err = forest().predict_proba(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ShapeMismatch {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_max_feature_index() {
        let tree = stump(3, 0.0, leaf(1, 1), leaf(1, 1));
        assert_eq!(tree.max_feature_index(), Some(3));
        let just_leaf = DecisionTree { root: leaf(1, 1) };
        assert_eq!(just_leaf.max_feature_index(), None);
    }

    #[test]
    fn test_empty_leaf_detected() {
        let tree = stump(0, 0.0, leaf(0, 0), leaf(1, 1));
        assert!(!tree.leaves_populated());
    }
}
