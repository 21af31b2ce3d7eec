use std::collections::BTreeMap;
use std::ops::Bound;

use crate::error::StateResult;
use crate::key::validate_key;
use crate::rwset::WriteSet;

/// Committed key-value state that transactions are simulated against.
///
/// This is the host side of the boundary. Chaincode never touches a
/// `WorldState` directly; it goes through a [`crate::ChaincodeStub`].
pub trait WorldState: Send + Sync {
    /// Read the committed value at `key`. Returns `Ok(None)` if absent.
    fn get(&self, key: &str) -> StateResult<Option<Vec<u8>>>;

    /// Committed entries with keys in `[start, end)`, ordered by key.
    /// Empty bounds are open.
    fn range(&self, start: &str, end: &str) -> StateResult<Vec<(String, Vec<u8>)>>;

    /// Apply a transaction's writes. Either every write lands or none does.
    fn apply(&self, writes: &WriteSet) -> StateResult<()>;

    /// Number of keys currently stored.
    fn len(&self) -> StateResult<usize>;

    fn is_empty(&self) -> StateResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Validate range bounds. Empty bounds are open and always valid.
pub(crate) fn validate_range(start: &str, end: &str) -> StateResult<()> {
    if !start.is_empty() {
        validate_key(start)?;
    }
    if !end.is_empty() {
        validate_key(end)?;
    }
    Ok(())
}

pub(crate) fn range_entries(
    entries: &BTreeMap<String, Vec<u8>>,
    start: &str,
    end: &str,
) -> Vec<(String, Vec<u8>)> {
    // BTreeMap::range panics on inverted bounds.
    if !start.is_empty() && !end.is_empty() && start >= end {
        return Vec::new();
    }
    let lower = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let upper = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };
    entries
        .range::<str, _>((lower, upper))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub(crate) fn apply_writes(entries: &mut BTreeMap<String, Vec<u8>>, writes: &WriteSet) {
    for (key, value) in writes.iter() {
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value.to_vec());
            }
            None => {
                entries.remove(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> BTreeMap<String, Vec<u8>> {
        ["a", "b", "c", "d"]
            .into_iter()
            .map(|k| (k.to_string(), k.as_bytes().to_vec()))
            .collect()
    }

    fn keys(found: Vec<(String, Vec<u8>)>) -> Vec<String> {
        found.into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn open_range_returns_everything() {
        assert_eq!(keys(range_entries(&entries(), "", "")), ["a", "b", "c", "d"]);
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(keys(range_entries(&entries(), "b", "d")), ["b", "c"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(range_entries(&entries(), "d", "b").is_empty());
        assert!(range_entries(&entries(), "b", "b").is_empty());
    }

    #[test]
    fn apply_writes_puts_and_deletes() {
        let mut map = entries();
        let mut writes = WriteSet::new();
        writes.put("e", b"e".to_vec());
        writes.delete("a");
        apply_writes(&mut map, &writes);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "c", "d", "e"]);
    }

    #[test]
    fn range_bounds_are_validated() {
        assert!(validate_range("", "").is_ok());
        assert!(validate_range("\u{0000}x", "").is_err());
    }
}
