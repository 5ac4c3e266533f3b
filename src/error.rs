//! Simulation error types

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors that can surface from a simulation call
#[derive(Error, Debug)]
pub enum SimError {
    /// Selection label is not one of the offered channel types
    #[error("unknown channel type: {0}")]
    UnknownChannel(String),

    /// Parameters decoded from the host are outside the supported range
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Singular value decomposition could not be computed
    #[error("decomposition failed: {reason}")]
    Decomposition { reason: String },

    /// Plot description could not be serialized
    #[error("plot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<SimError> for rustler::Error {
    fn from(err: SimError) -> Self {
        rustler::Error::Term(Box::new(err.to_string()))
    }
}
