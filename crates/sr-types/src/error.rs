use thiserror::Error;

/// Errors produced by record encoding and decoding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    /// JSON has no representation for NaN or infinity.
    #[error("unsupported GPA value: {0}")]
    UnsupportedGpa(f32),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for record operations.
pub type TypeResult<T> = Result<T, TypeError>;
