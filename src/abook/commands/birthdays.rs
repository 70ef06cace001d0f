use crate::book::AddressBook;
use crate::error::Result;

/// `birthdays`: records whose next birthday falls within the 7-day window.
pub fn run(book: &AddressBook) -> Result<String> {
    let upcoming = book.upcoming_birthdays();
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
