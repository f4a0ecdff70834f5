use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Schema mismatch on feature '{feature}': {detail}")]
    SchemaMismatch { feature: String, detail: String },

    #[error("Index {index} out of range for {len} candidates")]
    OutOfRange { index: usize, len: usize },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("No candidates to scan")]
    EmptyInput,

    #[error("No original record matches candidate {candidate_index} on every feature")]
    NotFound { candidate_index: usize },

    #[error("Feature not present: {0}")]
    MissingFeature(String),

    #[error("Feature '{feature}' has non-numeric value '{value}'")]
    InvalidValue { feature: String, value: String },

    #[error("Distance to candidate {index} is not a number")]
    NonFinite { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
