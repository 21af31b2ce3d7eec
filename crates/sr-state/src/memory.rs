use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StateResult;
use crate::rwset::WriteSet;
use crate::world::{apply_writes, range_entries, WorldState};

/// In-memory, `BTreeMap`-based world state.
///
/// Intended for tests and embedding. Entries are held behind a `RwLock` and
/// cloned on read. Data is lost when the state is dropped.
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(range_entries(&entries, start, end))
    }

    fn apply(&self, writes: &WriteSet) -> StateResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        apply_writes(&mut entries, writes);
        Ok(())
    }

    fn len(&self) -> StateResult<usize> {
        Ok(self.entries.read().expect("lock poisoned").len())
    }
}

impl std::fmt::Debug for InMemoryWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.entries.read().map(|e| e.len()).unwrap_or_default();
        f.debug_struct("InMemoryWorldState")
            .field("key_count", &count)
            .finish()
    }
}
