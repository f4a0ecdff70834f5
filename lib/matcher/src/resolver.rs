//! Record resolver
//!
//! Maps a winning candidate vector back to the source row it came from.
//! The aggregated candidate set drops rows with missing features, so
//! candidate indices do not line up with record indices and the row has
//! to be found again by value.

use crate::config::{FieldEquality, TieBreak};
use exomatch_core::{Error, FeatureSchema, FeatureVector, OriginalRecord, Result};
use tracing::{debug, trace};

/// Source record matched by [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'r> {
    pub index: usize,
    pub record: &'r OriginalRecord,
}

/// Whether every schema feature of `record` is present and equals the
/// corresponding component of `candidate`
pub fn record_matches(
    schema: &FeatureSchema,
    candidate: &FeatureVector,
    record: &OriginalRecord,
    equality: FieldEquality,
) -> bool {
    let hits = schema
        .iter()
        .zip(candidate.as_slice())
        .filter(|(name, component)| {
            record
                .numeric(name)
                .is_some_and(|value| equality.matches(value, **component))
        })
        .count();
    hits == schema.len()
}

/// Find the source record whose schema fields all equal `candidate`
///
/// Records are scanned to the end; with [`TieBreak::Last`] the last
/// matching record is returned, with [`TieBreak::First`] the first.
/// `candidate_index` is only carried into the `NotFound` error.
pub fn resolve<'r>(
    schema: &FeatureSchema,
    candidate: &FeatureVector,
    candidate_index: usize,
    records: &'r [OriginalRecord],
    equality: FieldEquality,
    tie_break: TieBreak,
) -> Result<Resolved<'r>> {
    if candidate.dim() != schema.len() {
        return Err(Error::DimensionMismatch {
            expected: schema.len(),
            actual: candidate.dim(),
        });
    }

    let mut found: Option<Resolved<'r>> = None;
    let mut matches = 0usize;

    for (index, record) in records.iter().enumerate() {
        if !record_matches(schema, candidate, record, equality) {
            continue;
        }
        matches += 1;
        trace!(index, "record matches candidate");
        if found.is_none() || tie_break == TieBreak::Last {
            found = Some(Resolved { index, record });
        }
    }

    debug!(
        records = records.len(),
        matches,
        candidate_index,
        "record resolution complete"
    );
    found.ok_or(Error::NotFound { candidate_index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::vectorize_record;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(["a", "b"]).unwrap()
    }

    fn records() -> Vec<OriginalRecord> {
        vec![
            OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("pl_name", "X")]),
            OriginalRecord::from_loose([("a", ""), ("b", "4"), ("pl_name", "Y")]),
        ]
    }

    #[test]
    fn test_missing_field_is_skipped() {
        let records = records();
        let candidate = FeatureVector::from([3.0, 4.0]);
        let resolved = resolve(
            &schema(),
            &candidate,
            0,
            &records,
            FieldEquality::Exact,
            TieBreak::Last,
        )
        .unwrap();
        assert_eq!(resolved.index, 0);
        assert_eq!(resolved.record.display_name("pl_name"), Some("X"));
    }

    #[test]
    fn test_not_found() {
        let records = records();
        let candidate = FeatureVector::from([5.0, 4.0]);
        assert_eq!(
            resolve(
                &schema(),
                &candidate,
                7,
                &records,
                FieldEquality::Exact,
                TieBreak::Last
            ),
            Err(Error::NotFound { candidate_index: 7 })
        );
    }

    #[test]
    fn test_last_matching_record_wins() {
        let records = vec![
            OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("pl_name", "first")]),
            OriginalRecord::from_loose([("a", "1"), ("b", "1"), ("pl_name", "other")]),
            OriginalRecord::from_loose([("a", "3.0"), ("b", "4"), ("pl_name", "last")]),
        ];
        let candidate = FeatureVector::from([3.0, 4.0]);

        let last = resolve(&schema(), &candidate, 0, &records, FieldEquality::Exact, TieBreak::Last)
            .unwrap();
        assert_eq!(last.index, 2);
        assert_eq!(last.record.display_name("pl_name"), Some("last"));

        let first = resolve(&schema(), &candidate, 0, &records, FieldEquality::Exact, TieBreak::First)
            .unwrap();
        assert_eq!(first.index, 0);
    }

    #[test]
    fn test_exact_equality_is_strict() {
        let records = vec![OriginalRecord::from_loose([("a", "0.3"), ("b", "1")])];
        let candidate = FeatureVector::from([0.1 + 0.2, 1.0]);

        assert!(resolve(&schema(), &candidate, 0, &records, FieldEquality::Exact, TieBreak::Last)
            .is_err());
        assert!(resolve(
            &schema(),
            &candidate,
            0,
            &records,
            FieldEquality::Within(1e-9),
            TieBreak::Last
        )
        .is_ok());
    }

    #[test]
    fn test_resolving_vectorized_record_is_idempotent() {
        let records = vec![
            OriginalRecord::from_loose([("a", "1.25"), ("b", "7"), ("pl_name", "A")]),
            OriginalRecord::from_loose([("a", "5.1521304"), ("b", "0.4176236"), ("pl_name", "B")]),
            OriginalRecord::from_loose([("a", "2"), ("b", ""), ("pl_name", "C")]),
        ];
        let candidate = vectorize_record(&schema(), &records[1]).unwrap();
        let resolved = resolve(&schema(), &candidate, 1, &records, FieldEquality::Exact, TieBreak::Last)
            .unwrap();
        assert_eq!(resolved.record, &records[1]);
    }

    #[test]
    fn test_candidate_dimension_checked() {
        let records = records();
        let candidate = FeatureVector::from([3.0]);
        assert!(matches!(
            resolve(&schema(), &candidate, 0, &records, FieldEquality::Exact, TieBreak::Last),
            Err(Error::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }
}
