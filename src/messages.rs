//! User-facing text for address book results.
//!
//! The core reports failures as structured errors only. Anything that talks
//! to a person goes through these functions.

use crate::domain::ValidationError;
use crate::error::BookError;
use crate::models::UpcomingBirthday;

/// The message to show a user for a failed operation.
pub fn user_message(err: &BookError) -> &'static str {
    match err {
        BookError::Validation(ValidationError::DateValueError(_)) => {
            "Please check the date format. It should be YYYY-MM-DD"
        }
        BookError::Validation(ValidationError::InvalidPhoneNumberFormat(_)) => {
            "Please check the phone number. It should be 10 digits"
        }
        BookError::Validation(ValidationError::EmptyName) => "Give me the name",
        BookError::NoneRecordFound(_) => "Please check the contact name or use 'all' command",
    }
}

/// Render upcoming birthdays as a two-column table.
pub fn format_upcoming(upcoming: &[UpcomingBirthday], window_days: u32) -> String {
    if upcoming.is_empty() {
        return format!("No upcoming birthdays within the next {} days.", window_days);
    }

    let mut table = format!("{:<20} {:<15}\n{}\n", "Name", "Celebration Day", "-".repeat(35));
    for entry in upcoming {
        table.push_str(&format!(
            "{:<20} {:<15}\n",
            entry.name,
            entry.celebration_day_label()
        ));
    }
    table
}
