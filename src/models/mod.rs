//! Data models for the address book.
//!
//! This module contains the contact record and the birthday reminder entries
//! produced by the upcoming-birthdays query.

pub mod record;
pub mod reminder;

pub use record::Record;
pub use reminder::UpcomingBirthday;
