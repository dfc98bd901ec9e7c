//! Field value types.
//!
//! # Responsibility
//! - Validate raw user input when a field value is constructed.
//! - Keep validated values immutable for the rest of their lifetime.
//!
//! # Invariants
//! - A `Phone` always holds exactly 10 ASCII decimal digits.
//! - A `Birthday` always holds a real calendar date.
//! - A `Name` is never empty after trimming.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

static BIRTHDAY_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

pub type FieldResult<T> = Result<T, FieldError>;

/// Validation error raised at field construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    InvalidPhone(String),
    InvalidBirthday(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name cannot be empty"),
            Self::InvalidPhone(value) => {
                write!(f, "invalid phone number `{value}`: expected exactly 10 digits")
            }
            Self::InvalidBirthday(value) => {
                write!(f, "invalid birthday `{value}`: expected DD.MM.YYYY")
            }
        }
    }
}

impl Error for FieldError {}

/// Contact display name, the unique key within an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Creates a name from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - `FieldError::EmptyName` when the trimmed input is empty.
    pub fn new(raw: impl Into<String>) -> FieldResult<Self> {
        let value = raw.into().trim().to_string();
        if value.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number holding exactly 10 decimal digits.
///
/// Deserialization goes through `TryFrom`, so persisted state that violates
/// the format is rejected on load instead of masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Creates a phone number from raw input.
    ///
    /// # Errors
    /// - `FieldError::InvalidPhone` unless the input is exactly 10 ASCII
    ///   decimal digits.
    pub fn new(raw: impl Into<String>) -> FieldResult<Self> {
        let value = raw.into();
        if !PHONE_FORMAT.is_match(&value) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> FieldResult<Self> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Birthday parsed from `DD.MM.YYYY` textual input.
///
/// An absent birthday is modeled as `Option<Birthday>` on the record, never
/// as an error state inside this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses a birthday from `DD.MM.YYYY` input.
    ///
    /// # Errors
    /// - `FieldError::InvalidBirthday` when the input does not match the
    ///   format or does not denote a real calendar date (e.g. `30.02.2000`).
    pub fn parse(raw: &str) -> FieldResult<Self> {
        let trimmed = raw.trim();
        if !BIRTHDAY_FORMAT.is_match(trimmed) {
            return Err(FieldError::InvalidBirthday(trimmed.to_string()));
        }
        let date = NaiveDate::parse_from_str(trimmed, "%d.%m.%Y")
            .map_err(|_| FieldError::InvalidBirthday(trimmed.to_string()))?;
        Ok(Self(date))
    }

    /// Parses optional birthday input: blank input means "no birthday set".
    pub fn parse_optional(raw: &str) -> FieldResult<Option<Self>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(raw).map(Some)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Birthday, FieldError, Name, Phone};
    use chrono::NaiveDate;

    #[test]
    fn phone_accepts_exactly_ten_digits() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(phone.to_string(), "1234567890");
    }

    #[test]
    fn phone_rejects_wrong_length_and_non_digits() {
        for raw in ["123456789", "12345678901", "123456789a", "12345 6789", ""] {
            let err = Phone::new(raw).unwrap_err();
            assert!(matches!(err, FieldError::InvalidPhone(value) if value == raw));
        }
    }

    #[test]
    fn birthday_parses_valid_date() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 3, 15).unwrap());
    }

    #[test]
    fn birthday_blank_input_means_unset() {
        assert_eq!(Birthday::parse_optional("").unwrap(), None);
        assert_eq!(Birthday::parse_optional("   ").unwrap(), None);
    }

    #[test]
    fn birthday_rejects_bad_format_and_impossible_dates() {
        for raw in ["1990-03-15", "15/03/1990", "5.3.1990", "30.02.2000", "32.01.2000"] {
            let err = Birthday::parse(raw).unwrap_err();
            assert!(matches!(err, FieldError::InvalidBirthday(_)), "input: {raw}");
        }
    }

    #[test]
    fn birthday_accepts_leap_day_only_in_leap_years() {
        assert!(Birthday::parse("29.02.2000").is_ok());
        assert!(Birthday::parse("29.02.1999").is_err());
    }

    #[test]
    fn name_trims_and_rejects_empty() {
        let name = Name::new("  Ann ").unwrap();
        assert_eq!(name.as_str(), "Ann");
        assert!(matches!(Name::new("   "), Err(FieldError::EmptyName)));
    }

    #[test]
    fn phone_deserialization_rejects_invalid_persisted_value() {
        let err = serde_json::from_str::<Phone>("\"not-a-phone\"").unwrap_err();
        assert!(err.to_string().contains("invalid phone number"));
    }
}
