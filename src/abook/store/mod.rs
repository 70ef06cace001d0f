//! Storage layer.
//!
//! Persistence is whole-book: the entire [`AddressBook`] is loaded once at
//! startup and written back once on exit. The [`SnapshotStore`] trait keeps
//! the rest of the crate decoupled from where the snapshot lives:
//!
//! - [`fs::FileStore`]: production storage, one versioned JSON file
//! - [`memory::InMemoryStore`]: in-memory storage for tests

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Whole-book snapshot persistence.
pub trait SnapshotStore {
    /// Load the persisted book; a store with no snapshot yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Persist the entire book, replacing any previous snapshot.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
