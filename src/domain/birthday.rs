//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Four-digit year, one- or two-digit month and day, nothing around them.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("birthday pattern is a valid regex")
});

/// A contact's date of birth.
///
/// Only `YYYY-MM-DD` text is accepted, and the result is always a real
/// calendar date. The original string is not kept.
///
/// # Example
///
/// ```
/// use address_book_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("1990-06-15").unwrap();
/// assert_eq!(birthday.to_string(), "1990-06-15");
/// assert!(Birthday::new("31-02-2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `YYYY-MM-DD` birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DateValueError` when the text has the wrong
    /// shape or names a date that does not exist.
    pub fn new(date: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(date) {
            return Err(ValidationError::DateValueError(date.to_string()));
        }
        NaiveDate::parse_from_str(date, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::DateValueError(date.to_string()))
    }

    /// The stored calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
