use crate::model::Record;
use serde::{Deserialize, Serialize};

/// Name-keyed collection of contact records.
///
/// Backed by a `Vec` so listings and snapshots keep insertion order; the
/// book never grows past interactive scale. At most one record per name:
/// `add_record` replaces the record bearing the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Removes the record with this name; no-op when absent.
    pub fn delete(&mut self, name: &str) {
        if let Some(pos) = self.position(name) {
            self.records.remove(pos);
        }
    }

    /// Records whose next birthday is at most 7 days away, in insertion
    /// order. Records without a birthday never qualify.
    pub fn upcoming_birthdays(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| matches!(r.days_to_next_birthday(), Some(d) if d <= 7))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}
