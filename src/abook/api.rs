//! API facade.
//!
//! Thin entry point over the command layer: owns the [`AddressBook`] and its
//! store, exposes one method per user command, and persists the book on
//! request. No business logic and no I/O formatting live here; commands do
//! the work and the session layer does the printing.
//!
//! Generic over [`SnapshotStore`] so tests run against `InMemoryStore` while
//! the binary uses `FileStore`.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::SnapshotStore;

pub struct AbookApi<S: SnapshotStore> {
    book: AddressBook,
    store: S,
}

impl<S: SnapshotStore> AbookApi<S> {
    /// Opens the store and loads the persisted book (empty when absent).
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self { book, store })
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<String> {
        commands::add::run(args, &mut self.book)
    }

    pub fn change_contact(&mut self, args: &[String]) -> Result<String> {
        commands::change::run(args, &mut self.book)
    }

    pub fn get_contact(&self, args: &[String]) -> Result<String> {
        commands::phone::run(args, &self.book)
    }

    pub fn all_contacts(&self) -> Result<String> {
        commands::all::run(&self.book)
    }

    pub fn add_birthday(&mut self, args: &[String]) -> Result<String> {
        commands::add_birthday::run(args, &mut self.book)
    }

    pub fn show_birthday(&self, args: &[String]) -> Result<String> {
        commands::show_birthday::run(args, &self.book)
    }

    pub fn upcoming_birthdays(&self) -> Result<String> {
        commands::birthdays::run(&self.book)
    }

    /// Writes the current book back to the store.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}
