//! Feature vectorizer
//!
//! Turns column-major candidate data, named descriptions and source
//! records into [`FeatureVector`]s in schema order.

use exomatch_core::{
    Error, FeatureColumns, FeatureSchema, FeatureVector, OriginalRecord, Result,
};
use std::collections::HashMap;

/// Row `k` of the columns, one component per column in column order
///
/// Fails with `SchemaMismatch` if column lengths differ and with
/// `OutOfRange` if `k` is past the end.
pub fn vectorize(columns: &FeatureColumns, k: usize) -> Result<FeatureVector> {
    let len = columns.candidate_count()?;
    if k >= len {
        return Err(Error::OutOfRange { index: k, len });
    }
    Ok(FeatureVector::new(
        columns.columns().iter().map(|c| c.values[k]).collect(),
    ))
}

/// Rows `0..n` of the columns
pub fn vectorize_all(columns: &FeatureColumns, n: usize) -> Result<Vec<FeatureVector>> {
    let len = columns.candidate_count()?;
    if n > len {
        return Err(Error::OutOfRange { index: n - 1, len });
    }
    Ok((0..n)
        .map(|k| FeatureVector::new(columns.columns().iter().map(|c| c.values[k]).collect()))
        .collect())
}

/// Query vector from a named description
pub fn vectorize_description(
    schema: &FeatureSchema,
    description: &HashMap<String, f64>,
) -> Result<FeatureVector> {
    schema
        .iter()
        .map(|name| {
            description
                .get(name)
                .copied()
                .ok_or_else(|| Error::MissingFeature(name.to_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(FeatureVector::new)
}

/// Vector of a source record's schema fields
pub fn vectorize_record(schema: &FeatureSchema, record: &OriginalRecord) -> Result<FeatureVector> {
    schema
        .iter()
        .map(|name| {
            let raw = record
                .raw(name)
                .ok_or_else(|| Error::MissingFeature(name.to_string()))?;
            record.numeric(name).ok_or_else(|| Error::InvalidValue {
                feature: name.to_string(),
                value: raw.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(FeatureVector::new)
}
