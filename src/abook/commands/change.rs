use crate::book::AddressBook;
use crate::error::Result;

use super::helpers::{existing_record_mut, expect_args};

/// `change <name> <old_phone> <new_phone>`: requires an existing contact.
/// A missing `old_phone` is a silent no-op, per `Record::edit_phone`.
pub fn run(args: &[String], book: &mut AddressBook) -> Result<String> {
    expect_args(args, 3)?;
    let record = existing_record_mut(book, &args[0])?;
    record.edit_phone(&args[1], &args[2])?;
    Ok("Contact updated.".to_string())
}
