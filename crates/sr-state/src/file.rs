use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::rwset::WriteSet;
use crate::world::{apply_writes, range_entries, WorldState};

/// World state persisted as a single JSON document.
///
/// On-disk format is a JSON object mapping each key to its value as a UTF-8
/// string. The whole document is rewritten on every [`WorldState::apply`]:
/// the new contents go to a temporary file in the same directory, which is
/// then renamed over the target. A crash leaves either the old or the new
/// document, never a mix.
pub struct FileWorldState {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl FileWorldState {
    /// Open the state at `path`. A missing file opens as an empty state.
    pub fn open(path: impl AsRef<Path>) -> StateResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let doc: BTreeMap<String, String> = serde_json::from_str(&raw)
                .map_err(|e| StateError::Serialization(format!("{}: {e}", path.display())))?;
            doc.into_iter().map(|(k, v)| (k, v.into_bytes())).collect()
        } else {
            BTreeMap::new()
        };
        debug!(path = %path.display(), keys = entries.len(), "opened world state");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, Vec<u8>>) -> StateResult<()> {
        let doc = entries
            .iter()
            .map(|(k, v)| {
                std::str::from_utf8(v).map(|s| (k.as_str(), s)).map_err(|_| {
                    StateError::Serialization(format!("value for key {k:?} is not valid UTF-8"))
                })
            })
            .collect::<StateResult<BTreeMap<&str, &str>>>()?;
        let json = serde_json::to_vec_pretty(&doc)
            .map_err(|e| StateError::Serialization(e.to_string()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StateError::Io(e.error))?;
        Ok(())
    }
}

impl WorldState for FileWorldState {
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
        let mut next = entries.clone();
        apply_writes(&mut next, writes);
        // Memory only changes once the document is safely on disk.
        self.persist(&next)?;
        *entries = next;
        debug!(path = %self.path.display(), writes = writes.len(), "persisted world state");
        Ok(())
    }

    fn len(&self) -> StateResult<usize> {
        Ok(self.entries.read().expect("lock poisoned").len())
    }
}

impl std::fmt::Debug for FileWorldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.entries.read().map(|e| e.len()).unwrap_or_default();
        f.debug_struct("FileWorldState")
            .field("path", &self.path)
            .field("key_count", &count)
            .finish()
    }
}
