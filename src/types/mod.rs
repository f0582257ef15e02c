//! Type definitions for the potability pipeline

pub mod sample;
pub mod verdict;

pub use sample::{FieldSpec, WaterSample, FEATURE_COUNT, FIELDS};
pub use verdict::{Potability, PotabilityVerdict};
