//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A phone number of exactly ten ASCII digits.
///
/// No normalization is applied: country codes, spaces and separators are
/// all rejected rather than stripped.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("+380501234567").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is not exactly
    /// ten decimal digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !TEN_DIGITS.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        for value in ["0000000000", "1234567890", "9876543210"] {
            assert_eq!(Phone::new(value).unwrap().as_str(), value);
        }
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new(" 1234567890").is_err());
        assert!(Phone::new("1234567890\n").is_err());
        // Non-ASCII digits are not phone digits.
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        assert_eq!(
            Phone::new("555"),
            Err(ValidationError::InvalidPhone("555".to_string()))
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"050-123\"");
        assert!(result.is_err());
    }
}
