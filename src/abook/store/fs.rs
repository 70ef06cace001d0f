use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SNAPSHOT_VERSION: u32 = 1;

/// On-disk envelope. The version tag lets a future format change reject or
/// migrate old files instead of misreading them.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    contacts: AddressBook,
}

/// File-backed store: one JSON snapshot of the whole book.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AbookError::Io)?;
        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|e| {
            AbookError::Snapshot(format!(
                "unreadable snapshot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(AbookError::Snapshot(format!(
                "unsupported snapshot version {} in {}",
                snapshot.version,
                self.path.display()
            )));
        }
        Ok(snapshot.contacts)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AbookError::Io)?;
            }
        }
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            contacts: book.clone(),
        };
        let content = serde_json::to_string_pretty(&snapshot).map_err(AbookError::Serialization)?;
        fs::write(&self.path, content).map_err(AbookError::Io)?;
        Ok(())
    }
}
