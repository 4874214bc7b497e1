//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: an immutable name, an ordered list of distinct phone
/// numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Unchecked wire form of a record; converted through the same operations a
/// caller would use so a stored file cannot smuggle in duplicate phones.
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = BookError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::from_name(data.name);
        for phone in data.phones {
            record.push_phone(phone)?;
        }
        record.birthday = data.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidName` if the name is blank.
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self::from_name(Name::new(name)?))
    }

    fn from_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the record.
    ///
    /// # Errors
    ///
    /// - `InvalidPhone` if the value is not exactly ten digits
    /// - `DuplicatePhone` if the record already holds it
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        self.push_phone(phone)
    }

    fn push_phone(&mut self, phone: Phone) -> BookResult<()> {
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.as_str().to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove `phone` from the record.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `PhoneNotFound` if `old_phone` is not on the record
    /// - `InvalidPhone` if `new_phone` fails validation
    /// - `DuplicatePhone` if `new_phone` is already held by another entry
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        let replacement = Phone::new(new_phone)?;

        let clashes = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == replacement);
        if clashes {
            return Err(BookError::DuplicatePhone(replacement.as_str().to_string()));
        }

        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up a phone by its exact digits.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse `birthday` as `DD.MM.YYYY` and set it, replacing any earlier value.
    pub fn add_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
