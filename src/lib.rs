//! # exomatch
//!
//! Finds the known exoplanet closest to a described planetary system.
//!
//! A system is described by six numbers (planet count, planet mass,
//! semi-major axis, eccentricity, stellar mass, stellar effective
//! temperature). exomatch scans a catalogue of fully-populated archive
//! rows for the nearest one under Euclidean distance, optionally after
//! per-feature median scaling, and maps the winner back to its archive
//! row to recover the planet name.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! exomatch --columns planets_columns.json --records planets_archive.json \
//!     --query 1,1.348,5.152,0,1.073,5800
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use exomatch::prelude::*;
//!
//! let schema = FeatureSchema::new(["a", "b"]).unwrap();
//! let columns = FeatureColumns::new(vec![
//!     FeatureColumn::new("a", vec![0.0, 3.0, 3.0]),
//!     FeatureColumn::new("b", vec![0.0, 4.0, 4.0]),
//! ]);
//! let records = vec![
//!     OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("pl_name", "X")]),
//!     OriginalRecord::from_loose([("a", ""), ("b", "4"), ("pl_name", "Y")]),
//! ];
//!
//! let session = MatchSession::new(schema, columns, records, MatchConfig::default()).unwrap();
//! let found = session.lookup(&FeatureVector::from([3.0, 4.0])).unwrap();
//! assert_eq!(found.candidate_index, 2);
//! assert_eq!(found.name(), Some("X"));
//! ```
//!
//! ## Crate Structure
//!
//! - `exomatch-core` - Schema, vectors, candidate columns, source records, errors
//! - `exomatch-matcher` - Vectorizer, matcher, resolver, normalizer, sessions, reports

pub mod dataset;

pub use exomatch_core::{
    Error, FeatureColumn, FeatureColumns, FeatureSchema, FeatureVector, OriginalRecord,
    PlanetarySystem, Result, PLANET_CANDIDATE_COUNT, PLANET_FEATURES, PLANET_IDENTIFIER,
};

pub use exomatch_matcher::{
    FieldEquality, Lookup, MatchConfig, MatchReport, MatchSession, Normalizer, TieBreak,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, FeatureColumn, FeatureColumns, FeatureSchema, FeatureVector, FieldEquality,
        Lookup, MatchConfig, MatchReport, MatchSession, Normalizer, OriginalRecord,
        PlanetarySystem, Result, TieBreak,
    };
}

/// Individual pipeline stages
pub mod stages {
    pub use exomatch_matcher::{
        nearest, resolve, vectorize, vectorize_all, vectorize_description, vectorize_record,
    };
}
