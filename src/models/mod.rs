//! Data models for the address book.
//!
//! A [`Record`] holds one contact; an [`AddressBook`] owns every record of a
//! session and answers the upcoming-birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use record::Record;
