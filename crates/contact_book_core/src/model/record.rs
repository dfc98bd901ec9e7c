//! Contact record model.
//!
//! # Responsibility
//! - Own one contact's name, phone list and optional birthday.
//! - Provide phone mutation and birthday-countdown helpers.
//!
//! # Invariants
//! - `phones` keeps insertion order; duplicate numbers are permitted.
//! - Every stored `Phone` passed format validation at insertion time.
//! - `birthday == None` is a valid state, distinct from any error.

use crate::model::field::{Birthday, FieldError, FieldResult, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RecordResult<T> = Result<T, RecordError>;

/// Record-level operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// `edit_phone` target does not exist on this record.
    PhoneNotFound(String),
    /// Birthday countdown requested while no birthday is set.
    NoBirthday,
    Field(FieldError),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PhoneNotFound(value) => write!(f, "phone not found: {value}"),
            Self::NoBirthday => write!(f, "no birthday set"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            Self::PhoneNotFound(_) | Self::NoBirthday => None,
        }
    }
}

impl From<FieldError> for RecordError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

/// One contact: name, ordered phone list, optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Creates a record from raw name and birthday input.
    ///
    /// Blank birthday input leaves the birthday unset.
    ///
    /// # Errors
    /// - `FieldError::EmptyName` for a blank name.
    /// - `FieldError::InvalidBirthday` for malformed non-blank birthday input.
    pub fn new(name: &str, birthday: &str) -> FieldResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::parse_optional(birthday)?,
        })
    }

    /// Validates and appends a phone number. Duplicates are permitted.
    pub fn add_phone(&mut self, raw: &str) -> FieldResult<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Removes the first phone equal to `raw`. Silent no-op when absent.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(pos) = self.phones.iter().position(|phone| phone.as_str() == raw) {
            self.phones.remove(pos);
        }
    }

    /// Returns the first phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Replaces the first phone equal to `old` with a validated `new` value.
    ///
    /// # Errors
    /// - `RecordError::PhoneNotFound` when `old` has no match; the record is
    ///   left unchanged.
    /// - `RecordError::Field` when `new` fails validation; the old phone is
    ///   left in place.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let pos = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        let replacement = Phone::new(new)?;
        self.phones[pos] = replacement;
        Ok(())
    }

    /// Days until the next birthday occurrence, counted from today.
    ///
    /// # Errors
    /// - `RecordError::NoBirthday` when no birthday is set.
    pub fn days_until_birthday(&self) -> RecordResult<i64> {
        self.days_until_birthday_from(Local::now().date_naive())
    }

    /// Countdown variant with an explicit reference date.
    ///
    /// The stored month/day is projected onto `today`'s year; when the
    /// projection is not strictly in the future it is moved to next year, so
    /// an anniversary falling exactly on `today` counts as a full year away.
    pub fn days_until_birthday_from(&self, today: NaiveDate) -> RecordResult<i64> {
        let birthday = self.birthday.ok_or(RecordError::NoBirthday)?;
        let date = birthday.date();

        let this_year = project_onto_year(date, today.year());
        let days = (this_year - today).num_days();
        if days > 0 {
            return Ok(days);
        }

        let next_year = project_onto_year(date, today.year() + 1);
        Ok((next_year - today).num_days())
    }
}

/// Moves a birthday's month/day onto the given year.
///
/// A Feb 29 birthday counts as Mar 1 in common years.
fn project_onto_year(date: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, date.month(), date.day()) {
        Some(projected) => projected,
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(date),
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        Ok(())
    }
}
