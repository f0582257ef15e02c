//! Potability verdict data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary potability label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Potability {
    NotPotable,
    Potable,
}

impl Potability {
    /// Class index in the probability pair: 0 = not potable, 1 = potable
    pub fn class_index(self) -> usize {
        match self {
            Potability::NotPotable => 0,
            Potability::Potable => 1,
        }
    }

    /// Headline shown in the result banner
    pub fn headline(self) -> &'static str {
        match self {
            Potability::Potable => "POTABLE WATER",
            Potability::NotPotable => "NOT POTABLE",
        }
    }

    /// One-line narrative for the verdict
    pub fn narrative(self) -> &'static str {
        match self {
            Potability::Potable => {
                "This water is safe to drink based on the provided parameters."
            }
            Potability::NotPotable => {
                "This water is unsafe to drink. Further treatment required."
            }
        }
    }
}

/// Verdict produced for one analyzed sample.
///
/// Created per request and discarded after display; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotabilityVerdict {
    /// Predicted label
    pub label: Potability,

    /// Probability mass assigned to the predicted label.
    ///
    /// Always the probability of the class matching `label`, even when a
    /// non-default decision threshold makes the label disagree with the
    /// higher-probability class.
    pub confidence: f64,

    /// Probability the sample is potable
    pub p_potable: f64,

    /// Probability the sample is not potable
    pub p_not_potable: f64,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,
}

impl PotabilityVerdict {
    /// Build a verdict from a label and the (not potable, potable) pair
    pub fn new(label: Potability, probabilities: [f64; 2]) -> Self {
        Self {
            label,
            confidence: probabilities[label.class_index()],
            p_not_potable: probabilities[0],
            p_potable: probabilities[1],
            analyzed_at: Utc::now(),
        }
    }
}
