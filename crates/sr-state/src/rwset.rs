//! Transaction simulation over committed world state.
//!
//! A [`TransactionStub`] keeps two caches, as a peer's simulator does:
//! - `reads`: what the transaction observed in committed state, first read wins
//! - `writes`: what the transaction wants to commit
//!
//! Reads never consult `writes`. When simulation succeeds the host takes the
//! [`ReadWriteSet`], checks the reads are still current, and applies the
//! writes. Otherwise the set is dropped and world state is unchanged.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::StateResult;
use crate::key::validate_key;
use crate::stub::{ChaincodeStub, TransactionContext};
use crate::world::{validate_range, WorldState};

/// Pending writes of a single transaction, ordered by key.
///
/// `None` marks a delete. A later write to the same key replaces an earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    entries: BTreeMap<String, Option<Vec<u8>>>,
}

impl WriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.entries.insert(key.into(), Some(value));
    }

    pub fn delete(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    /// The pending write for `key`: `Some(None)` is a pending delete.
    pub fn get(&self, key: &str) -> Option<Option<&[u8]>> {
        self.entries.get(key).map(|v| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[u8]>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything a simulated transaction read and wants to write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadWriteSet {
    /// Committed value observed per key (`None` if the key was absent).
    pub reads: BTreeMap<String, Option<Vec<u8>>>,
    pub writes: WriteSet,
}

impl ReadWriteSet {
    /// Keys whose committed value no longer matches what was read.
    pub fn stale_reads<W: WorldState + ?Sized>(&self, world: &W) -> StateResult<Vec<String>> {
        let mut stale = Vec::new();
        for (key, observed) in &self.reads {
            if world.get(key)? != *observed {
                stale.push(key.clone());
            }
        }
        Ok(stale)
    }
}

/// A [`ChaincodeStub`] that simulates one transaction against a [`WorldState`].
pub struct TransactionStub<'a, W: WorldState + ?Sized> {
    tx_id: String,
    timestamp: DateTime<Utc>,
    world: &'a W,
    reads: RefCell<BTreeMap<String, Option<Vec<u8>>>>,
    writes: WriteSet,
}

impl<'a, W: WorldState + ?Sized> TransactionStub<'a, W> {
    /// Open a stub timestamped now.
    pub fn new(world: &'a W, tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp: Utc::now(),
            world,
            reads: RefCell::new(BTreeMap::new()),
            writes: WriteSet::new(),
        }
    }

    /// Writes buffered so far.
    pub fn writes(&self) -> &WriteSet {
        &self.writes
    }

    /// Finish simulation and hand the read-write set to the host.
    pub fn into_rwset(self) -> ReadWriteSet {
        ReadWriteSet {
            reads: self.reads.into_inner(),
            writes: self.writes,
        }
    }

    fn record_read(&self, key: &str, value: Option<&Vec<u8>>) {
        self.reads
            .borrow_mut()
            .entry(key.to_string())
            .or_insert_with(|| value.cloned());
    }
}

impl<W: WorldState + ?Sized> ChaincodeStub for TransactionStub<'_, W> {
    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn tx_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn get_state(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        validate_key(key)?;
        let value = self.world.get(key)?;
        debug!(tx_id = %self.tx_id, key, found = value.is_some(), "get_state");
        self.record_read(key, value.as_ref());
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: Vec<u8>) -> StateResult<()> {
        validate_key(key)?;
        debug!(tx_id = %self.tx_id, key, bytes = value.len(), "put_state");
        self.writes.put(key, value);
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> StateResult<()> {
        validate_key(key)?;
        debug!(tx_id = %self.tx_id, key, "del_state");
        self.writes.delete(key);
        Ok(())
    }

    fn get_state_by_range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>> {
        validate_range(start, end)?;
        let found = self.world.range(start, end)?;
        debug!(tx_id = %self.tx_id, start, end, count = found.len(), "get_state_by_range");
        for (key, value) in &found {
            self.record_read(key, Some(value));
        }
        Ok(found)
    }
}

impl<W: WorldState + ?Sized> TransactionContext for TransactionStub<'_, W> {
    fn stub(&self) -> &dyn ChaincodeStub {
        self
    }

    fn stub_mut(&mut self) -> &mut dyn ChaincodeStub {
        self
    }
}
