use crate::book::AddressBook;
use crate::error::Result;

use super::helpers::{existing_record, expect_args};

/// `show-birthday <name>`: the stored date, or a fixed note when unset.
pub fn run(args: &[String], book: &AddressBook) -> Result<String> {
    expect_args(args, 1)?;
    let record = existing_record(book, &args[0])?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "No birthday set.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, add_birthday};
    use crate::error::AbookError;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shows_stored_birthday() {
        let mut book = AddressBook::new();
        add::run(&args(&["alice", "1234567890"]), &mut book).unwrap();
        add_birthday::run(&args(&["alice", "05.03.1990"]), &mut book).unwrap();
        assert_eq!(run(&args(&["alice"]), &book).unwrap(), "05.03.1990");
    }

    #[test]
    fn no_birthday_set() {
        let mut book = AddressBook::new();
        add::run(&args(&["alice", "1234567890"]), &mut book).unwrap();
        assert_eq!(run(&args(&["alice"]), &book).unwrap(), "No birthday set.");
    }

    #[test]
    fn unknown_contact_fails() {
        let book = AddressBook::new();
        let err = run(&args(&["bob"]), &book).unwrap_err();
        assert!(matches!(err, AbookError::ContactNotFound(_)));
    }
}
