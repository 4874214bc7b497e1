//! AddressBook model: the keyed collection of every contact in a session.

use super::record::Record;
use crate::domain::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of days ahead of today covered by the upcoming-birthday query.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday falls inside the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Day to send the greeting; weekend birthdays move to the next Monday
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// All contacts, keyed by name and kept in insertion order.
///
/// Overwriting a name keeps its original position; deleting a name and
/// adding it again moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        match self.index_of(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact (case-sensitive) name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable lookup by exact name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self
            .index_of(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        self.records.remove(index);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in book order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Birthdays in the next [`UPCOMING_WINDOW_DAYS`] days, counted from the
    /// local calendar date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays whose next occurrence lies in `[today, today + 7]`.
    ///
    /// A birthday already past this year counts from next year. Results keep
    /// book order and carry the congratulation date rather than the birthday
    /// itself.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let mut next = birthday.occurrence_in(today.year())?;
                if next < today {
                    next = birthday.occurrence_in(today.year() + 1)?;
                }

                let days_until = next.signed_duration_since(today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
                    return None;
                }

                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    congratulation_date: congratulation_date(next)?,
                })
            })
            .collect()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

/// Move a weekend date forward to the following Monday.
fn congratulation_date(date: NaiveDate) -> Option<NaiveDate> {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift))
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

// Serde support - a book is stored as the ordered list of its records
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.records.serialize(serializer)
    }
}

// Records are re-inserted through add_record so the name-key invariant holds
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
