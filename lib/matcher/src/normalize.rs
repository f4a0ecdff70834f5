//! Per-feature median scaling
//!
//! Archive features span very different units (eccentricity below 1,
//! effective temperature in the thousands). Dividing every component by
//! a per-feature constant keeps one feature from dominating the
//! Euclidean distance.

use exomatch_core::{Error, FeatureSchema, FeatureVector, Result};

/// Divides vectors component-wise by fixed per-feature constants
#[derive(Debug, Clone, PartialEq)]
pub struct Normalizer {
    medians: FeatureVector,
}

impl Normalizer {
    /// Medians must be finite, non-zero and one per schema feature
    pub fn new(schema: &FeatureSchema, medians: Vec<f64>) -> Result<Self> {
        if medians.len() != schema.len() {
            return Err(Error::DimensionMismatch {
                expected: schema.len(),
                actual: medians.len(),
            });
        }
        for (name, median) in schema.iter().zip(&medians) {
            if !median.is_finite() || *median == 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "median for '{}' must be finite and non-zero, got {}",
                    name, median
                )));
            }
        }
        Ok(Self {
            medians: FeatureVector::new(medians),
        })
    }

    pub fn medians(&self) -> &FeatureVector {
        &self.medians
    }

    /// Raw units to normalized units
    pub fn scale(&self, vector: &FeatureVector) -> Result<FeatureVector> {
        vector.div_elementwise(&self.medians)
    }

    /// Normalized units back to raw units
    pub fn unscale(&self, vector: &FeatureVector) -> Result<FeatureVector> {
        vector.mul_elementwise(&self.medians)
    }
}
