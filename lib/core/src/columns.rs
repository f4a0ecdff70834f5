//! Aggregated candidate columns
//!
//! Column-major form of the candidate dataset: one column of values per
//! feature, every column the same length, one row per candidate.

use crate::{Error, FeatureSchema, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values of one feature across all candidates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl FeatureColumn {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered feature columns; column order defines vector component order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FeatureColumns {
    columns: Vec<FeatureColumn>,
}

impl FeatureColumns {
    pub fn new(columns: Vec<FeatureColumn>) -> Self {
        Self { columns }
    }

    /// Project an unordered feature map onto the schema order
    ///
    /// Extra keys in the map are ignored.
    pub fn from_map(schema: &FeatureSchema, mut map: HashMap<String, Vec<f64>>) -> Result<Self> {
        let columns = schema
            .iter()
            .map(|name| {
                map.remove(name)
                    .map(|values| FeatureColumn::new(name, values))
                    .ok_or_else(|| Error::MissingFeature(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns })
    }

    #[inline]
    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    /// Number of features
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Common column length
    ///
    /// `SchemaMismatch` names the first column whose length differs
    /// from the first column's.
    pub fn candidate_count(&self) -> Result<usize> {
        let Some(first) = self.columns.first() else {
            return Ok(0);
        };
        let expected = first.len();
        for column in &self.columns[1..] {
            if column.len() != expected {
                return Err(Error::SchemaMismatch {
                    feature: column.name.clone(),
                    detail: format!(
                        "column has {} values, '{}' has {}",
                        column.len(),
                        first.name,
                        expected
                    ),
                });
            }
        }
        Ok(expected)
    }

    /// Check column names equal the schema features, in order
    pub fn ensure_schema(&self, schema: &FeatureSchema) -> Result<()> {
        let mut seen = AHashSet::with_capacity(self.width());
        if let Some(duplicate) = self.names().find(|n| !seen.insert(*n)) {
            return Err(Error::SchemaMismatch {
                feature: duplicate.to_string(),
                detail: "column listed more than once".to_string(),
            });
        }

        if self.width() != schema.len() {
            let feature = schema
                .iter()
                .find(|f| !self.names().any(|n| n == *f))
                .or_else(|| self.names().find(|n| schema.position(n).is_none()))
                .unwrap_or_default()
                .to_string();
            return Err(Error::SchemaMismatch {
                feature,
                detail: format!(
                    "dataset has {} columns, schema has {} features",
                    self.width(),
                    schema.len()
                ),
            });
        }

        for (position, (column, feature)) in self.names().zip(schema.iter()).enumerate() {
            if column != feature {
                return Err(Error::SchemaMismatch {
                    feature: feature.to_string(),
                    detail: format!("column {} is '{}'", position, column),
                });
            }
        }
        Ok(())
    }
}
