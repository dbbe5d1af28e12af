//! Birthday reminder produced by the upcoming-birthdays query.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Display format for celebration days (`YYYY.MM.DD`).
pub const CELEBRATION_DAY_FORMAT: &str = "%Y.%m.%d";

/// Serialize a date as `YYYY.MM.DD`.
fn serialize_celebration_day<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CELEBRATION_DAY_FORMAT))
}

/// A contact whose birthday falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// The weekday on which to congratulate the contact
    #[serde(serialize_with = "serialize_celebration_day")]
    pub celebration_day: NaiveDate,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, celebration_day: NaiveDate) -> Self {
        Self {
            name: name.into(),
            celebration_day,
        }
    }

    /// The celebration day as fixed-width `YYYY.MM.DD` text.
    pub fn celebration_day_label(&self) -> String {
        self.celebration_day
            .format(CELEBRATION_DAY_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.celebration_day_label())
    }
}
