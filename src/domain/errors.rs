//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 decimal digits.
    InvalidPhoneNumberFormat(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` date.
    DateValueError(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhoneNumberFormat(phone) => {
                write!(f, "Phone number must be a string of 10 digits: {}", phone)
            }
            Self::DateValueError(date) => {
                write!(f, "Date must be in YYYY-MM-DD format: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
