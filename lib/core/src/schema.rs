//! Feature schema definitions
//!
//! The schema is the ordered list of numeric features that make up a
//! vector. Position `i` of every query vector, candidate vector and
//! projected record refers to `features[i]`.

use crate::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Planet count, planet mass, semi-major axis, eccentricity, stellar mass, stellar temperature
pub const PLANET_FEATURES: [&str; 6] = [
    "pl_pnum",
    "pl_bmassj",
    "pl_orbsmax",
    "pl_orbeccen",
    "st_mass",
    "st_teff",
];

/// Identifier field of the exoplanet archive rows
pub const PLANET_IDENTIFIER: &str = "pl_name";

/// Number of archive rows that have all six planet features populated
pub const PLANET_CANDIDATE_COUNT: usize = 1075;

/// Ordered, fixed list of named numeric features
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "SchemaDef", into = "SchemaDef")]
pub struct FeatureSchema {
    features: Vec<String>,
    identifier: String,
}

#[derive(Serialize, Deserialize)]
struct SchemaDef {
    features: Vec<String>,
    #[serde(default = "default_identifier")]
    identifier: String,
}

fn default_identifier() -> String {
    PLANET_IDENTIFIER.to_string()
}

impl TryFrom<SchemaDef> for FeatureSchema {
    type Error = Error;

    fn try_from(def: SchemaDef) -> Result<Self> {
        FeatureSchema::with_identifier(def.features, def.identifier)
    }
}

impl From<FeatureSchema> for SchemaDef {
    fn from(schema: FeatureSchema) -> Self {
        Self {
            features: schema.features,
            identifier: schema.identifier,
        }
    }
}

impl FeatureSchema {
    /// Create a schema with the default `pl_name` identifier field
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_identifier(features, PLANET_IDENTIFIER)
    }

    /// Create a schema with a custom identifier field
    ///
    /// Fails if the feature list is empty, contains duplicates, or
    /// lists the identifier field as a feature.
    pub fn with_identifier<I, S>(features: I, identifier: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let features: Vec<String> = features.into_iter().map(Into::into).collect();
        let identifier = identifier.into();

        if features.is_empty() {
            return Err(Error::InvalidConfig("schema has no features".to_string()));
        }

        let mut seen = AHashSet::with_capacity(features.len());
        for name in &features {
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "feature '{}' listed twice",
                    name
                )));
            }
        }

        if seen.contains(identifier.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "identifier '{}' cannot also be a feature",
                identifier
            )));
        }

        Ok(Self {
            features,
            identifier,
        })
    }

    /// The six-feature exoplanet schema
    pub fn planets() -> Self {
        Self {
            features: PLANET_FEATURES.iter().map(|s| s.to_string()).collect(),
            identifier: PLANET_IDENTIFIER.to_string(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[inline]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Position of a feature in vector layout
    pub fn position(&self, name: &str) -> Option<usize> {
        self.features.iter().position(|f| f == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }
}
