use chrono::{DateTime, Utc};

use crate::error::StateResult;

/// Per-transaction view of world state, as handed to chaincode by the host.
///
/// Implementations must satisfy these invariants:
/// - `get_state` and `get_state_by_range` observe committed state only. A
///   value written by `put_state` earlier in the same transaction is not
///   visible to later reads.
/// - Writes are buffered until the host commits the transaction. A failed
///   transaction leaves world state untouched.
/// - Every key argument is checked with [`crate::validate_key`].
pub trait ChaincodeStub {
    /// Identifier the host assigned to this transaction.
    fn tx_id(&self) -> &str;

    /// Time the transaction was proposed.
    fn tx_timestamp(&self) -> DateTime<Utc>;

    /// Read the committed value at `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Buffer a write of `value` at `key`.
    fn put_state(&mut self, key: &str, value: Vec<u8>) -> StateResult<()>;

    /// Buffer a delete of `key`. Deleting a missing key is not an error.
    fn del_state(&mut self, key: &str) -> StateResult<()>;

    /// Committed entries with keys in `[start, end)`, ordered by key.
    ///
    /// An empty `start` or `end` leaves that side of the range open.
    fn get_state_by_range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>>;
}

/// Context passed to every contract function.
pub trait TransactionContext {
    fn stub(&self) -> &dyn ChaincodeStub;

    fn stub_mut(&mut self) -> &mut dyn ChaincodeStub;
}
