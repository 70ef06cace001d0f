use crate::book::AddressBook;
use crate::error::{AbookError, Result};
use crate::model::Record;

/// Enforces the exact argument count a command expects.
pub fn expect_args(args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(AbookError::ArgumentCount {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Looks up an existing record, failing when the name is unknown.
pub fn existing_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
}

pub fn existing_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AbookError::ContactNotFound(name.to_string()))
}
