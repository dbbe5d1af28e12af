//! Birthday scheduling: yearly occurrence and weekend shifting.

use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Default reminder window, in days from today (inclusive).
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The date `birthday` falls on in `year`.
///
/// February 29 birthdays are observed on March 1 in non-leap years.
pub fn occurrence_in(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(date) => Some(date),
        None if birthday.month() == 2 && birthday.day() == 29 => {
            NaiveDate::from_ymd_opt(year, 3, 1)
        }
        None => None,
    }
}

/// The first occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year())?;
    if this_year < today {
        occurrence_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a weekend date to the following Monday.
pub fn celebration_day(occurrence: NaiveDate) -> Option<NaiveDate> {
    match occurrence.weekday() {
        Weekday::Sat => occurrence.checked_add_days(Days::new(2)),
        Weekday::Sun => occurrence.checked_add_days(Days::new(1)),
        _ => Some(occurrence),
    }
}

/// Celebration day for `birthday` if its next occurrence is at most
/// `window_days` away from `today`.
pub fn schedule(birthday: &Birthday, today: NaiveDate, window_days: u32) -> Option<NaiveDate> {
    let occurrence = next_occurrence(birthday, today)?;
    let gap = occurrence.signed_duration_since(today).num_days();
    if gap > i64::from(window_days) {
        return None;
    }
    celebration_day(occurrence)
}
