//! Water sample measurements and input field metadata
//!
//! The nine measurements are held in a named struct rather than a bare
//! array so the trained feature order is fixed at the type level. The
//! `FIELDS` table drives the input form, validation, and the load-time
//! check against the artifact's stored feature names.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Number of measurements per sample, fixed by the trained model
pub const FEATURE_COUNT: usize = 9;

/// Static metadata for one numeric input field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Display name
    pub name: &'static str,
    /// Key used in the artifact's feature-name list
    pub key: &'static str,
    /// Measurement unit, if any
    pub unit: Option<&'static str>,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Value taken when the user enters nothing
    pub default: f64,
    /// Suggested input granularity
    pub step: f64,
    /// Short semantic description
    pub help: &'static str,
    /// Guidance note shown under the prompt
    pub guidance: &'static str,
}

impl FieldSpec {
    /// Check a value against the field bounds. Boundary values are accepted.
    pub fn validate(&self, value: f64) -> Result<f64, PipelineError> {
        if !value.is_finite() || value < self.min || value > self.max {
            return Err(PipelineError::OutOfRange {
                field: self.name,
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(value)
    }
}

/// Input fields in the exact order the model was trained on
pub const FIELDS: [FieldSpec; FEATURE_COUNT] = [
    FieldSpec {
        name: "pH",
        key: "ph",
        unit: None,
        min: 0.0,
        max: 14.0,
        default: 7.0,
        step: 0.1,
        help: "Acidity/alkalinity level (7 = neutral)",
        guidance: "Normal range: 6.5 - 8.5",
    },
    FieldSpec {
        name: "Hardness",
        key: "hardness",
        unit: Some("mg/L"),
        min: 0.0,
        max: 500.0,
        default: 150.0,
        step: 1.0,
        help: "Mineral content in water",
        guidance: "Soft: <75, Hard: >150",
    },
    FieldSpec {
        name: "Solids",
        key: "solids",
        unit: Some("ppm"),
        min: 0.0,
        max: 60000.0,
        default: 20000.0,
        step: 100.0,
        help: "Total dissolved solids",
        guidance: "WHO limit: <1000 ppm",
    },
    FieldSpec {
        name: "Chloramines",
        key: "chloramines",
        unit: Some("ppm"),
        min: 0.0,
        max: 10.0,
        default: 7.0,
        step: 0.1,
        help: "Disinfectant level",
        guidance: "Safe level: <4 ppm",
    },
    FieldSpec {
        name: "Sulfate",
        key: "sulfate",
        unit: Some("mg/L"),
        min: 0.0,
        max: 600.0,
        default: 330.0,
        step: 1.0,
        help: "Sulfate concentration",
        guidance: "WHO limit: <500 mg/L",
    },
    FieldSpec {
        name: "Conductivity",
        key: "conductivity",
        unit: Some("μS/cm"),
        min: 0.0,
        max: 800.0,
        default: 400.0,
        step: 1.0,
        help: "Electrical conductivity",
        guidance: "Pure water: 0.5-3 μS/cm",
    },
    FieldSpec {
        name: "Organic Carbon",
        key: "organic_carbon",
        unit: Some("ppm"),
        min: 0.0,
        max: 30.0,
        default: 10.0,
        step: 0.1,
        help: "Organic matter content",
        guidance: "Lower is better",
    },
    FieldSpec {
        name: "Trihalomethanes",
        key: "trihalomethanes",
        unit: Some("μg/L"),
        min: 0.0,
        max: 120.0,
        default: 60.0,
        step: 1.0,
        help: "Disinfection byproducts",
        guidance: "EPA limit: <80 μg/L",
    },
    FieldSpec {
        name: "Turbidity",
        key: "turbidity",
        unit: Some("NTU"),
        min: 0.0,
        max: 10.0,
        default: 3.0,
        step: 0.1,
        help: "Water cloudiness",
        guidance: "WHO limit: <5 NTU",
    },
];

/// Feature keys in the trained order, as stored in the artifact
pub fn feature_keys() -> [&'static str; FEATURE_COUNT] {
    [
        FIELDS[0].key,
        FIELDS[1].key,
        FIELDS[2].key,
        FIELDS[3].key,
        FIELDS[4].key,
        FIELDS[5].key,
        FIELDS[6].key,
        FIELDS[7].key,
        FIELDS[8].key,
    ]
}

/// One water sample's measured properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    pub ph: f64,
    pub hardness: f64,
    pub solids: f64,
    pub chloramines: f64,
    pub sulfate: f64,
    pub conductivity: f64,
    pub organic_carbon: f64,
    pub trihalomethanes: f64,
    pub turbidity: f64,
}

impl WaterSample {
    /// Build a sample from values collected in the trained field order
    pub fn from_features(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            ph: values[0],
            hardness: values[1],
            solids: values[2],
            chloramines: values[3],
            sulfate: values[4],
            conductivity: values[5],
            organic_carbon: values[6],
            trihalomethanes: values[7],
            turbidity: values[8],
        }
    }

    /// Pack the measurements into the fixed trained order.
    ///
    /// Pure function of the sample; this is the only place the struct is
    /// flattened into a vector, so the ordering lives in exactly one spot.
    pub fn to_features(&self) -> [f64; FEATURE_COUNT] {
        [
            self.ph,
            self.hardness,
            self.solids,
            self.chloramines,
            self.sulfate,
            self.conductivity,
            self.organic_carbon,
            self.trihalomethanes,
            self.turbidity,
        ]
    }

    /// Validate every measurement against its field bounds
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (spec, value) in FIELDS.iter().zip(self.to_features()) {
            spec.validate(value)?;
        }
        Ok(())
    }
}

impl Default for WaterSample {
    /// Sample with every field at its documented default
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, spec) in values.iter_mut().zip(FIELDS.iter()) {
            *slot = spec.default;
        }
        Self::from_features(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_matches_field_table() {
        let sample = WaterSample::default();
        assert_eq!(sample.ph, 7.0);
        assert_eq!(sample.hardness, 150.0);
        assert_eq!(sample.solids, 20000.0);
        assert_eq!(sample.turbidity, 3.0);
        assert!(sample.validate().is_ok());
    }

    #[test]
    fn test_feature_order_is_fixed() {
        let sample = WaterSample::default();
        let features = sample.to_features();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[0], sample.ph);
        assert_eq!(features[4], sample.sulfate);
        assert_eq!(features[8], sample.turbidity);

        let roundtrip = WaterSample::from_features(features);
        assert_eq!(roundtrip, sample);
    }

    #[test]
    fn test_bounds_accept_boundaries() {
        let ph = &FIELDS[0];
        assert!(ph.validate(0.0).is_ok());
        assert!(ph.validate(14.0).is_ok());
        assert!(ph.validate(7.0).is_ok());
    }

    #[test]
    fn test_bounds_reject_outside_values() {
        let ph = &FIELDS[0];
        assert!(matches!(
            ph.validate(-0.1),
            Err(PipelineError::OutOfRange { field: "pH", .. })
        ));
        assert!(ph.validate(14.1).is_err());
        assert!(ph.validate(f64::NAN).is_err());
        assert!(ph.validate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_field_keys_are_unique() {
        let keys = feature_keys();
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
