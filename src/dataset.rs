//! JSON dataset loading
//!
//! Reads collections that were already prepared and serialized as JSON.
//! Candidate columns may be stored either as an ordered array of
//! `{"name", "values"}` objects or as an object keyed by feature name;
//! the latter is projected onto the schema order.

use anyhow::{Context, Result};
use exomatch_core::{FeatureColumns, FeatureSchema, OriginalRecord};
use exomatch_matcher::MatchConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum ColumnsFile {
    Ordered(FeatureColumns),
    Named(HashMap<String, Vec<f64>>),
}

/// Load candidate columns in schema order
pub fn load_columns<P: AsRef<Path>>(path: P, schema: &FeatureSchema) -> Result<FeatureColumns> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading candidate columns from {:?}", path))?;
    let parsed: ColumnsFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing candidate columns in {:?}", path))?;

    let columns = match parsed {
        ColumnsFile::Ordered(columns) => columns,
        ColumnsFile::Named(map) => FeatureColumns::from_map(schema, map)?,
    };
    debug!(path = ?path, width = columns.width(), "loaded candidate columns");
    Ok(columns)
}

/// Load the full source record collection
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<OriginalRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading records from {:?}", path))?;
    let records: Vec<OriginalRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing records in {:?}", path))?;
    debug!(path = ?path, records = records.len(), "loaded source records");
    Ok(records)
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MatchConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading match config from {:?}", path))?;
    let config = MatchConfig::from_json_str(&text)
        .with_context(|| format!("parsing match config in {:?}", path))?;
    Ok(config)
}

pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<FeatureSchema> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading schema from {:?}", path))?;
    let schema = serde_json::from_str(&text)
        .with_context(|| format!("parsing schema in {:?}", path))?;
    Ok(schema)
}
