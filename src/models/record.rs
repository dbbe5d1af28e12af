//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, any number of phones and an optional birthday.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with only a name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number.
    ///
    /// On `InvalidPhoneNumberFormat` the phone list is left unchanged.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(false)` without touching anything when no phone equals
    /// `old`; a miss is not an error and `new` is not inspected.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.phones.iter_mut().find(|phone| **phone == *old) {
            Some(phone) => {
                phone.set(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns whether anything was removed; a miss is a no-op.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| *p == *phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Look up a phone by its digits.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| **p == *phone)
    }

    /// Set the birthday, overwriting any previous one.
    ///
    /// Returns the birthday that was replaced, so callers can tell an update
    /// from a first-time add.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<Option<Birthday>, ValidationError> {
        let birthday = Birthday::new(birthday)?;
        Ok(self.birthday.replace(birthday))
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
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
