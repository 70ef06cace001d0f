use crate::book::AddressBook;
use crate::error::Result;
use crate::model::{ContactName, Record};

use super::helpers::{existing_record_mut, expect_args};

/// `add <name> <phone>`: fetch-or-create the record, then append the phone.
/// The record is created before the phone is validated, so a bad phone
/// still leaves a phoneless record behind.
pub fn run(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);

    if book.find(name).is_none() {
        book.add_record(Record::new(ContactName::parse(name)?));
    }
    existing_record_mut(book, name)?.add_phone(phone)?;

    Ok("Contact added.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AbookError;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn creates_record_and_adds_phone() {
        let mut book = AddressBook::new();
        let msg = run(&args(&["alice", "1234567890"]), &mut book).unwrap();
        assert_eq!(msg, "Contact added.");
        let rec = book.find("alice").unwrap();
        assert_eq!(rec.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn appends_to_existing_record() {
        let mut book = AddressBook::new();
        run(&args(&["alice", "1234567890"]), &mut book).unwrap();
        run(&args(&["alice", "0987654321"]), &mut book).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn wrong_argument_count_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        let err = run(&args(&["alice"]), &mut book).unwrap_err();
        assert!(matches!(err, AbookError::ArgumentCount { expected: 2, got: 1 }));
        assert!(book.is_empty());
    }

    #[test]
    fn invalid_phone_keeps_the_fresh_record() {
        let mut book = AddressBook::new();
        let err = run(&args(&["alice", "123"]), &mut book).unwrap_err();
        assert!(matches!(err, AbookError::Validation(_)));
        assert!(book.find("alice").unwrap().phones().is_empty());
    }
}
