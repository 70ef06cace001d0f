use super::SnapshotStore;
use crate::book::AddressBook;
use crate::error::Result;

/// Keeps the snapshot in memory. Used by tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<AddressBook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(self.snapshot.clone().unwrap_or_default())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.snapshot = Some(book.clone());
        Ok(())
    }
}
