//! # exomatch Core
//!
//! Data model for the exomatch nearest-neighbor matcher.
//!
//! - [`FeatureSchema`] - Ordered list of numeric features defining vector layout
//! - [`FeatureVector`] - Feature values in schema order, with Euclidean distance
//! - [`FeatureColumns`] - Column-major candidate dataset
//! - [`OriginalRecord`] - Source row with optional text fields
//! - [`PlanetarySystem`] - Typed query description for the planet schema
//!
//! ## Example
//!
//! ```rust
//! use exomatch_core::{FeatureSchema, FeatureVector, OriginalRecord};
//!
//! let schema = FeatureSchema::new(["a", "b"]).unwrap();
//! let query = FeatureVector::from([0.0, 0.0]);
//! let candidate = FeatureVector::from([3.0, 4.0]);
//! assert_eq!(query.euclidean_distance(&candidate).unwrap(), 5.0);
//!
//! let record = OriginalRecord::from_loose([("a", "3"), ("b", ""), ("pl_name", "X")]);
//! assert_eq!(record.numeric("a"), Some(3.0));
//! assert!(!record.is_present("b"));
//! assert_eq!(schema.len(), 2);
//! ```

pub mod columns;
pub mod error;
pub mod record;
pub mod schema;
pub mod system;
pub mod vector;

pub use columns::{FeatureColumn, FeatureColumns};
pub use error::{Error, Result};
pub use record::OriginalRecord;
pub use schema::{FeatureSchema, PLANET_CANDIDATE_COUNT, PLANET_FEATURES, PLANET_IDENTIFIER};
pub use system::PlanetarySystem;
pub use vector::FeatureVector;
