//! Match configuration
//!
//! Declarative settings for a matching session. Every field has a
//! default, so an empty JSON object is a valid configuration.

use exomatch_core::{Error, FeatureSchema, Result, PLANET_CANDIDATE_COUNT};
use serde::{Deserialize, Serialize};

/// Which of several equally good entries wins a scan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Replace on `<=`: the last entry with the best value wins
    #[default]
    Last,
    /// Replace on `<`: the first entry with the best value wins
    First,
}

impl TieBreak {
    /// Whether `value` replaces the current best under this policy
    #[inline]
    pub fn replaces(self, value: f64, best: f64) -> bool {
        match self {
            TieBreak::Last => value <= best,
            TieBreak::First => value < best,
        }
    }
}

/// How a record field is compared against a candidate component
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldEquality {
    /// Bitwise float equality of the parsed field and the component
    #[default]
    Exact,
    /// `|field - component| <= eps`; tolerates float round-trip error
    Within(f64),
}

impl FieldEquality {
    #[inline]
    pub fn matches(self, field: f64, component: f64) -> bool {
        match self {
            FieldEquality::Exact => field == component,
            FieldEquality::Within(eps) => (field - component).abs() <= eps,
        }
    }
}

/// Settings for a [`crate::MatchSession`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Tie policy for both the nearest-neighbor scan and record resolution
    pub tie_break: TieBreak,

    pub equality: FieldEquality,

    /// Number of leading candidates to vectorize; all of them when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_count: Option<usize>,

    /// Per-feature normalization constants, in schema order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medians: Option<Vec<f64>>,

    /// The candidate columns were already divided by `medians`; the
    /// winner is multiplied back before it is resolved against the records
    pub candidates_normalized: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Last,
            equality: FieldEquality::Exact,
            candidate_count: None,
            medians: None,
            candidates_normalized: false,
        }
    }
}

impl MatchConfig {
    /// Defaults for the exoplanet archive, including its fixed candidate count
    pub fn planets() -> Self {
        Self {
            candidate_count: Some(PLANET_CANDIDATE_COUNT),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_equality(mut self, equality: FieldEquality) -> Self {
        self.equality = equality;
        self
    }

    #[must_use]
    pub fn with_candidate_count(mut self, count: usize) -> Self {
        self.candidate_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_medians(mut self, medians: Vec<f64>) -> Self {
        self.medians = Some(medians);
        self
    }

    /// Mark the candidate columns as already divided by `medians`
    #[must_use]
    pub fn with_normalized_candidates(mut self, medians: Vec<f64>) -> Self {
        self.medians = Some(medians);
        self.candidates_normalized = true;
        self
    }

    /// Check the configuration against a schema
    pub fn validate(&self, schema: &FeatureSchema) -> Result<()> {
        if let FieldEquality::Within(eps) = self.equality {
            if !(eps.is_finite() && eps >= 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "equality tolerance must be a non-negative number, got {}",
                    eps
                )));
            }
        }

        if self.candidates_normalized && self.medians.is_none() {
            return Err(Error::InvalidConfig(
                "normalized candidates require medians".to_string(),
            ));
        }

        if let Some(medians) = &self.medians {
            if medians.len() != schema.len() {
                return Err(Error::DimensionMismatch {
                    expected: schema.len(),
                    actual: medians.len(),
                });
            }
        }

        Ok(())
    }
}
