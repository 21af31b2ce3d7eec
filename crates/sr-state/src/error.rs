/// Errors from world state access.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The key violates the ledger's key rules.
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Serialization or deserialization failure in a state backend.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend cannot serve requests right now. Not raised by the
    /// bundled backends; reserved for stubs backed by a remote peer.
    #[error("world state unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for state operations.
pub type StateResult<T> = Result<T, StateError>;
