//! Matching session
//!
//! Holds the schema, candidate vectors and source records for the
//! lifetime of a matching session. Everything is built once in
//! [`MatchSession::new`] and never mutated, so a session can be shared
//! behind an `Arc` and queried from many threads.

use crate::config::MatchConfig;
use crate::matcher::nearest;
use crate::normalize::Normalizer;
use crate::resolver::resolve;
use crate::vectorizer::{vectorize_all, vectorize_description};
use exomatch_core::{
    FeatureColumns, FeatureSchema, FeatureVector, OriginalRecord, PlanetarySystem, Result,
};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{info, warn};

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<'s> {
    /// Euclidean distance in matching space (normalized when medians are set)
    pub distance: f64,
    pub candidate_index: usize,
    /// Winning candidate in raw units
    pub candidate: &'s FeatureVector,
    pub record_index: usize,
    pub record: &'s OriginalRecord,
    identifier: &'s str,
}

impl<'s> Lookup<'s> {
    /// Display name of the matched record, read from the schema's identifier field
    pub fn name(&self) -> Option<&'s str> {
        self.record.display_name(self.identifier)
    }
}

/// Pre-loaded reference data plus the settings used to query it
#[derive(Debug, Clone)]
pub struct MatchSession {
    schema: FeatureSchema,
    config: MatchConfig,
    normalizer: Option<Normalizer>,
    /// Candidates in raw units, used for resolution and reporting
    raw_candidates: Vec<FeatureVector>,
    /// Candidates in matching space; empty when no normalizer is set
    scaled_candidates: Vec<FeatureVector>,
    records: Vec<OriginalRecord>,
}

impl MatchSession {
    /// Validate the inputs and vectorize the candidates
    pub fn new(
        schema: FeatureSchema,
        columns: FeatureColumns,
        records: Vec<OriginalRecord>,
        config: MatchConfig,
    ) -> Result<Self> {
        config.validate(&schema)?;
        columns.ensure_schema(&schema)?;

        let available = columns.candidate_count()?;
        let count = config.candidate_count.unwrap_or(available);
        let vectorized = vectorize_all(&columns, count)?;

        let normalizer = config
            .medians
            .clone()
            .map(|medians| Normalizer::new(&schema, medians))
            .transpose()?;

        // Records always hold raw units, so resolution needs raw candidates
        let (raw_candidates, scaled_candidates) = match &normalizer {
            Some(normalizer) if config.candidates_normalized => {
                let raw = vectorized
                    .iter()
                    .map(|c| normalizer.unscale(c))
                    .collect::<Result<Vec<_>>>()?;
                (raw, vectorized)
            }
            Some(normalizer) => {
                let scaled = vectorized
                    .iter()
                    .map(|c| normalizer.scale(c))
                    .collect::<Result<Vec<_>>>()?;
                (vectorized, scaled)
            }
            None => (vectorized, Vec::new()),
        };

        info!(
            features = schema.len(),
            candidates = raw_candidates.len(),
            available,
            records = records.len(),
            normalized = normalizer.is_some(),
            prescaled = config.candidates_normalized,
            "match session ready"
        );

        Ok(Self {
            schema,
            config,
            normalizer,
            raw_candidates,
            scaled_candidates,
            records,
        })
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.normalizer.as_ref()
    }

    /// Candidates in raw units
    pub fn candidates(&self) -> &[FeatureVector] {
        &self.raw_candidates
    }

    pub fn records(&self) -> &[OriginalRecord] {
        &self.records
    }

    /// Bring a raw-unit query into matching space
    pub fn prepare_query(&self, query: &FeatureVector) -> Result<FeatureVector> {
        match &self.normalizer {
            Some(normalizer) => normalizer.scale(query),
            None => Ok(query.clone()),
        }
    }

    /// Match a query given in raw units
    pub fn lookup(&self, query: &FeatureVector) -> Result<Lookup<'_>> {
        let prepared = self.prepare_query(query)?;
        self.lookup_scaled(&prepared)
    }

    /// Match a query already in matching space
    pub fn lookup_scaled(&self, query: &FeatureVector) -> Result<Lookup<'_>> {
        let space = if self.normalizer.is_some() {
            &self.scaled_candidates
        } else {
            &self.raw_candidates
        };

        let found = nearest(query, space, self.config.tie_break)?;
        let candidate = &self.raw_candidates[found.index];

        let resolved = resolve(
            &self.schema,
            candidate,
            found.index,
            &self.records,
            self.config.equality,
            self.config.tie_break,
        )
        .map_err(|err| {
            warn!(candidate_index = found.index, %err, "unresolved match");
            err
        })?;

        Ok(Lookup {
            distance: found.distance,
            candidate_index: found.index,
            candidate,
            record_index: resolved.index,
            record: resolved.record,
            identifier: self.schema.identifier(),
        })
    }

    /// Match a named description given in raw units
    pub fn lookup_description(&self, description: &HashMap<String, f64>) -> Result<Lookup<'_>> {
        let query = vectorize_description(&self.schema, description)?;
        self.lookup(&query)
    }

    /// Match a typed planetary system; the schema must cover its features
    pub fn lookup_system(&self, system: &PlanetarySystem) -> Result<Lookup<'_>> {
        self.lookup_description(&system.to_description())
    }

    /// Independent raw-unit lookups, run in parallel
    pub fn lookup_batch(&self, queries: &[FeatureVector]) -> Vec<Result<Lookup<'_>>> {
        queries.par_iter().map(|q| self.lookup(q)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use exomatch_core::{Error, FeatureColumn};

    fn schema() -> FeatureSchema {
        FeatureSchema::new(["a", "b"]).unwrap()
    }

    fn columns() -> FeatureColumns {
        FeatureColumns::new(vec![
            FeatureColumn::new("a", vec![0.0, 3.0, 3.0]),
            FeatureColumn::new("b", vec![0.0, 4.0, 4.0]),
        ])
    }

    fn records() -> Vec<OriginalRecord> {
        vec![
            OriginalRecord::from_loose([("a", "0"), ("b", "0"), ("pl_name", "Origin")]),
            OriginalRecord::from_loose([("a", ""), ("b", "4"), ("pl_name", "Partial")]),
            OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("pl_name", "Pythagoras")]),
        ]
    }

    fn session(config: MatchConfig) -> MatchSession {
        MatchSession::new(schema(), columns(), records(), config).unwrap()
    }

    #[test]
    fn test_lookup_origin() {
        let session = session(MatchConfig::default());
        let found = session.lookup(&FeatureVector::from([0.0, 0.0])).unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.candidate_index, 0);
        assert_eq!(found.record_index, 0);
        assert_eq!(found.name(), Some("Origin"));
    }

    #[test]
    fn test_lookup_last_tie() {
        let session = session(MatchConfig::default());
        let found = session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
        assert_eq!(found.candidate_index, 2);
        assert_eq!(found.candidate.as_slice(), &[3.0, 4.0]);
        assert_eq!(found.name(), Some("Pythagoras"));

        let first = MatchConfig::default().with_tie_break(TieBreak::First);
        let first_session = self::session(first);
        let found = first_session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
        assert_eq!(found.candidate_index, 1);
        assert_eq!(found.name(), Some("Pythagoras"));
    }

    #[test]
    fn test_candidate_count_limits_scan() {
        let session = session(MatchConfig::default().with_candidate_count(1));
        assert_eq!(session.candidates().len(), 1);
        let found = session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
        assert_eq!(found.candidate_index, 0);
        assert_eq!(found.distance, 5.0);
    }

    #[test]
    fn test_candidate_count_out_of_range() {
        let result = MatchSession::new(
            schema(),
            columns(),
            records(),
            MatchConfig::default().with_candidate_count(4),
        );
        assert!(matches!(result, Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_empty_session_lookup() {
        let session = session(MatchConfig::default().with_candidate_count(0));
        assert_eq!(
            session.lookup(&FeatureVector::from([0.0, 0.0])),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_not_found_is_reported() {
        let records = vec![OriginalRecord::from_loose([("a", "9"), ("b", "9")])];
        let session = MatchSession::new(schema(), columns(), records, MatchConfig::default()).unwrap();
        assert_eq!(
            session.lookup(&FeatureVector::from([0.0, 0.0])),
            Err(Error::NotFound { candidate_index: 0 })
        );
    }

    #[test]
    fn test_columns_must_follow_schema() {
        let swapped = FeatureSchema::new(["b", "a"]).unwrap();
        let result = MatchSession::new(swapped, columns(), records(), MatchConfig::default());
        assert!(matches!(result, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_normalized_matching_resolves_raw_values() {
        // Unscaled, b dominates and the query lands on the closer b value
        let schema = schema();
        let columns = FeatureColumns::new(vec![
            FeatureColumn::new("a", vec![1.0, 0.0]),
            FeatureColumn::new("b", vec![1000.0, 1100.0]),
        ]);
        let records = vec![
            OriginalRecord::from_loose([("a", "1"), ("b", "1000"), ("pl_name", "Near a")]),
            OriginalRecord::from_loose([("a", "0"), ("b", "1100"), ("pl_name", "Near b")]),
        ];
        let query = FeatureVector::from([1.0, 1100.0]);

        let plain = MatchSession::new(
            schema.clone(),
            columns.clone(),
            records.clone(),
            MatchConfig::default(),
        )
        .unwrap();
        assert_eq!(plain.lookup(&query).unwrap().name(), Some("Near b"));

        let scaled = MatchSession::new(
            schema,
            columns,
            records,
            MatchConfig::default().with_medians(vec![0.01, 1000.0]),
        )
        .unwrap();
        let found = scaled.lookup(&query).unwrap();
        assert_eq!(found.name(), Some("Near a"));
        assert_eq!(found.candidate.as_slice(), &[1.0, 1000.0]);
    }

    #[test]
    fn test_lookup_scaled_skips_normalization() {
        let session = session(MatchConfig::default().with_medians(vec![3.0, 4.0]));
        let found = session.lookup_scaled(&FeatureVector::from([1.0, 1.0])).unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.name(), Some("Pythagoras"));
    }

    #[test]
    fn test_normalized_candidates_resolve_unscaled_winner() {
        let medians = vec![2.0, 0.5];
        let prescaled = FeatureColumns::new(vec![
            FeatureColumn::new("a", vec![0.0, 1.5, 1.5]),
            FeatureColumn::new("b", vec![0.0, 8.0, 8.0]),
        ]);
        let session = MatchSession::new(
            schema(),
            prescaled,
            records(),
            MatchConfig::default().with_normalized_candidates(medians),
        )
        .unwrap();
        assert_eq!(session.candidates()[2].as_slice(), &[3.0, 4.0]);

        let found = session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.candidate_index, 2);
        assert_eq!(found.candidate.as_slice(), &[3.0, 4.0]);
        assert_eq!(found.name(), Some("Pythagoras"));
    }

    #[test]
    fn test_name_uses_schema_identifier() {
        let schema: FeatureSchema =
            serde_json::from_str(r#"{"features": ["a", "b"], "identifier": "id"}"#).unwrap();
        let records = vec![OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("id", "X")])];
        let columns = FeatureColumns::new(vec![
            FeatureColumn::new("a", vec![3.0]),
            FeatureColumn::new("b", vec![4.0]),
        ]);
        let session = MatchSession::new(schema, columns, records, MatchConfig::default()).unwrap();

        let found = session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
        assert_eq!(found.name(), Some("X"));
    }

    #[test]
    fn test_lookup_description() {
        let session = session(MatchConfig::default());
        let mut description = HashMap::new();
        description.insert("a".to_string(), 0.1);
        description.insert("b".to_string(), 0.1);
        assert_eq!(session.lookup_description(&description).unwrap().name(), Some("Origin"));

        description.remove("b");
        assert_eq!(
            session.lookup_description(&description),
            Err(Error::MissingFeature("b".to_string()))
        );
    }

    #[test]
    fn test_lookup_batch_matches_sequential() {
        let session = session(MatchConfig::default());
        let queries = vec![
            FeatureVector::from([0.0, 0.0]),
            FeatureVector::from([3.0, 4.0]),
            FeatureVector::from([1.0]),
        ];
        let results = session.lookup_batch(&queries);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().candidate_index, 0);
        assert_eq!(results[1].as_ref().unwrap().candidate_index, 2);
        assert!(matches!(results[2], Err(Error::DimensionMismatch { .. })));
    }
}
