use crate::book::AddressBook;
use crate::error::Result;

use super::helpers::{existing_record_mut, expect_args};

/// `add-birthday <name> <DD.MM.YYYY>`: requires an existing contact.
pub fn run(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 2)?;
    let record = existing_record_mut(book, &args[0])?;
    record.set_birthday(&args[1])?;
    Ok("Birthday added.".to_string())
}
