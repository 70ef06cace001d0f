use crate::book::AddressBook;
use crate::error::Result;

use super::helpers::{existing_record, expect_args};

/// `phone <name>`: renders the whole record for an existing contact.
pub fn run(args: &[String], book: &AddressBook) -> Result<String> {
    expect_args(args, 1)?;
    let record = existing_record(book, &args[0])?;
    Ok(record.to_string())
}
