//! # exomatch Matcher
//!
//! Brute-force nearest-neighbor matching of a query vector against a
//! fixed candidate set, with the winner resolved back to its source row.
//!
//! ## Stages
//!
//! - **Vectorizer**: column-major candidate data, named descriptions and
//!   source records to vectors in schema order
//! - **Matcher**: linear Euclidean scan, configurable tie policy
//! - **Resolver**: finds the source record whose fields all equal the
//!   winning candidate
//! - **Session**: builds candidates once, answers many lookups
//!
//! ## Example
//!
//! ```rust
//! use exomatch_core::{FeatureColumn, FeatureColumns, FeatureSchema, FeatureVector, OriginalRecord};
//! use exomatch_matcher::{MatchConfig, MatchSession};
//!
//! let schema = FeatureSchema::new(["a", "b"]).unwrap();
//! let columns = FeatureColumns::new(vec![
//!     FeatureColumn::new("a", vec![0.0, 3.0]),
//!     FeatureColumn::new("b", vec![0.0, 4.0]),
//! ]);
//! let records = vec![
//!     OriginalRecord::from_loose([("a", "3"), ("b", "4"), ("pl_name", "X")]),
//!     OriginalRecord::from_loose([("a", ""), ("b", "4"), ("pl_name", "Y")]),
//!     OriginalRecord::from_loose([("a", "0"), ("b", "0"), ("pl_name", "Z")]),
//! ];
//!
//! let session = MatchSession::new(schema, columns, records, MatchConfig::default()).unwrap();
//! let found = session.lookup(&FeatureVector::from([2.9, 4.1])).unwrap();
//! assert_eq!(found.candidate_index, 1);
//! assert_eq!(found.name(), Some("X"));
//! ```
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Columns   │────>│ Vectorizer  │────>│ Candidates  │
//! │ (per field) │     │  (row k→v)  │     │  (scaled?)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!   query ──> Normalizer ──> ┌─────────────┐     │
//!                            │   Matcher   │<────┘
//!                            │ (L2 scan)   │
//!                            └─────────────┘
//!                                   │
//!       ┌─────────────┐      ┌─────────────┐
//!       │   Records   │─────>│  Resolver   │──> Lookup / NotFound
//!       └─────────────┘      └─────────────┘
//! ```

pub mod config;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod resolver;
pub mod session;
pub mod vectorizer;

pub use config::{FieldEquality, MatchConfig, TieBreak};
pub use matcher::{nearest, Nearest};
pub use normalize::Normalizer;
pub use report::{FeatureContribution, MatchReport};
pub use resolver::{record_matches, resolve, Resolved};
pub use session::{Lookup, MatchSession};
pub use vectorizer::{vectorize, vectorize_all, vectorize_description, vectorize_record};
