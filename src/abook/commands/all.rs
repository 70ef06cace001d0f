use crate::book::AddressBook;
use crate::error::Result;

/// `all`: every record under a "Contacts:" header, insertion order.
pub fn run(book: &AddressBook) -> Result<String> {
    if book.is_empty() {
        return Ok("Contacts are empty.".to_string());
    }
    let listing = book
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(format!("Contacts:\n{listing}"))
}
