//! One module per user command.
//!
//! Handlers are pure: they take the parsed argument list and the book,
//! mutate or query it, and return the display string. They never print and
//! never translate errors; the session layer maps each error kind to its
//! fixed user-facing message.

pub mod add;
pub mod add_birthday;
pub mod all;
pub mod birthdays;
pub mod change;
pub mod helpers;
pub mod phone;
pub mod show_birthday;
