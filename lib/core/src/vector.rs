use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Dense vector of feature values in schema order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Fail with `DimensionMismatch` unless `other` has the same length
    #[inline]
    pub fn check_dim(&self, other: &FeatureVector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(())
    }

    /// Squared Euclidean distance
    #[inline]
    pub fn squared_distance(&self, other: &FeatureVector) -> Result<f64> {
        self.check_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum())
    }

    /// Euclidean (L2) distance
    #[inline]
    pub fn euclidean_distance(&self, other: &FeatureVector) -> Result<f64> {
        self.squared_distance(other).map(f64::sqrt)
    }

    /// Component-wise division, used for median scaling
    pub fn div_elementwise(&self, divisors: &FeatureVector) -> Result<FeatureVector> {
        self.check_dim(divisors)?;
        Ok(FeatureVector::new(
            self.data
                .iter()
                .zip(divisors.data.iter())
                .map(|(a, b)| a / b)
                .collect(),
        ))
    }

    /// Component-wise multiplication, the inverse of [`Self::div_elementwise`]
    pub fn mul_elementwise(&self, factors: &FeatureVector) -> Result<FeatureVector> {
        self.check_dim(factors)?;
        Ok(FeatureVector::new(
            self.data
                .iter()
                .zip(factors.data.iter())
                .map(|(a, b)| a * b)
                .collect(),
        ))
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[f64; N]> for FeatureVector {
    fn from(data: [f64; N]) -> Self {
        Self::new(data.to_vec())
    }
}
