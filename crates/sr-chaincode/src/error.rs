use sr_state::StateError;
use sr_types::TypeError;

/// Errors returned by contract functions and the chaincode host.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    #[error("student with ID {0} already exists")]
    AlreadyExists(String),

    #[error("student with ID {0} does not exist")]
    NotFound(String),

    /// A world state read failed.
    #[error("failed to read from world state: {0}")]
    ReadState(#[source] StateError),

    /// A world state write or commit failed.
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Record(#[from] TypeError),

    #[error("incorrect number of arguments for {function}: expected {expected}, got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value {value:?} for parameter {parameter}: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    #[error("function {0} not found in contract")]
    UnknownFunction(String),

    /// A key read during simulation changed before the commit.
    #[error("read conflict on key {0}: committed value changed during simulation")]
    ReadConflict(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
