//! Explainable match output
//!
//! Owned, serializable view of a [`Lookup`] with a per-feature breakdown
//! of how much each feature contributed to the distance.

use crate::session::{Lookup, MatchSession};
use exomatch_core::{FeatureVector, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// One feature's share of the distance
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureContribution {
    pub feature: String,
    /// Query value in matching space
    pub query: f64,
    /// Candidate value in matching space
    pub candidate: f64,
    /// Squared difference; these sum to the squared distance
    pub squared: f64,
}

/// Summary of a successful lookup
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub distance: f64,
    pub candidate_index: usize,
    pub record_index: usize,
    /// Query in matching space
    pub query: FeatureVector,
    /// Winning candidate in raw units
    pub candidate: FeatureVector,
    pub explain: Vec<FeatureContribution>,
    pub record: BTreeMap<String, Option<String>>,
}

impl MatchReport {
    /// Build a report for `lookup`, which must come from `session`
    ///
    /// `query` is in matching space, as passed to
    /// [`MatchSession::lookup_scaled`] or returned by
    /// [`MatchSession::prepare_query`].
    pub fn new(session: &MatchSession, query: &FeatureVector, lookup: &Lookup<'_>) -> Result<Self> {
        let candidate = session.prepare_query(lookup.candidate)?;
        query.check_dim(&candidate)?;

        let explain = session
            .schema()
            .iter()
            .zip(query.as_slice().iter().zip(candidate.as_slice()))
            .map(|(feature, (q, c))| FeatureContribution {
                feature: feature.to_string(),
                query: *q,
                candidate: *c,
                squared: (q - c) * (q - c),
            })
            .collect();

        Ok(Self {
            name: lookup.name().map(str::to_string),
            distance: lookup.distance,
            candidate_index: lookup.candidate_index,
            record_index: lookup.record_index,
            query: query.clone(),
            candidate: lookup.candidate.clone(),
            explain,
            record: lookup.record.sorted_fields(),
        })
    }

    /// Feature with the largest share of the distance
    pub fn top_contributing_feature(&self) -> Option<&str> {
        self.explain
            .iter()
            .max_by(|a, b| a.squared.partial_cmp(&b.squared).unwrap_or(std::cmp::Ordering::Equal))
            .filter(|c| c.squared > 0.0)
            .map(|c| c.feature.as_str())
    }
}
