//! Command handlers for the interactive session.
//!
//! Each handler maps one command onto one address book operation and returns
//! the reply text. Failures come back as [`BookError`] and are turned into a
//! single user-facing line by [`render_error`].

use crate::domain::ValidationError;
use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, Record, UpcomingBirthday};

/// Reply for a birthday query with no matches.
const NO_UPCOMING: &str = "No upcoming birthdays in the next 7 days.";

/// Take the first `N` positional arguments or fail with `MissingArguments`.
fn take_args<const N: usize>(args: &[String]) -> BookResult<[&str; N]> {
    if args.len() < N {
        return Err(BookError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn require<'a>(book: &'a AddressBook, name: &str) -> BookResult<&'a Record> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

fn require_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

/// `add <name> <phone>`: create the contact or add a phone to an existing one.
///
/// A new contact is stored before its phone is checked, so a rejected phone
/// still leaves the contact in the book with no phones.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = take_args::<2>(args)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name)?);
        "Contact added."
    };

    require_mut(book, name)?.add_phone(phone)?;
    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, old_phone, new_phone] = take_args::<3>(args)?;
    require_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args::<1>(args)?;
    let record = require(book, name)?;

    if record.phones().is_empty() {
        return Ok("No phones available.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; "))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    book.to_string()
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, birthday] = take_args::<2>(args)?;
    require_mut(book, name)?.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let [name] = take_args::<1>(args)?;
    let record = require(book, name)?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday),
        None => format!("No birthday set for '{}'.", name),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook) -> String {
    render_upcoming(&book.get_upcoming_birthdays())
}

fn render_upcoming(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return NO_UPCOMING.to_string();
    }
    std::iter::once("Upcoming birthdays:".to_string())
        .chain(upcoming.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The command reference printed by `help`.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     \x20 hello                                 - greet\n\
     \x20 add <name> <phone>                    - add a contact or phone to existing contact\n\
     \x20 change <name> <old_phone> <new_phone> - change phone for existing contact\n\
     \x20 phone <name>                          - show phone by name\n\
     \x20 all                                   - list all contacts\n\
     \x20 add-birthday <name> <DD.MM.YYYY>      - add birthday to contact\n\
     \x20 show-birthday <name>                  - show birthday of contact\n\
     \x20 birthdays                             - show upcoming birthdays (next 7 days)\n\
     \x20 help                                  - show this help\n\
     \x20 exit | close                          - quit"
}

/// One-line message shown to the user for a failed command.
pub fn render_error(err: &BookError) -> String {
    match err {
        BookError::Validation(ValidationError::InvalidName) => "Name cannot be empty".to_string(),
        BookError::Validation(ValidationError::InvalidPhone(_)) => {
            "Phone number must contain exactly 10 digits".to_string()
        }
        BookError::Validation(ValidationError::InvalidDate(_)) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
        BookError::DuplicatePhone(phone) => format!("Phone {} already exists", phone),
        BookError::PhoneNotFound(phone) => format!("Phone {} not found", phone),
        BookError::RecordNotFound(name) => format!("Record {} not found", name),
        BookError::ContactNotFound(_) => "Contact not found.".to_string(),
        BookError::MissingArguments => "Not enough arguments provided.".to_string(),
    }
}
