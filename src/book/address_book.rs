//! The address book: records keyed by contact name.

use super::birthdays::{self, DEFAULT_WINDOW_DAYS};
use crate::error::{BookError, BookResult};
use crate::models::{Record, UpcomingBirthday};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

/// A collection of contact records with at most one record per name.
///
/// Records are keyed by the exact text of their name, so "Ann" and "ann"
/// are different contacts. Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any record already filed
    /// there. The replaced record is returned; nothing is merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Find the record filed under `name`.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NoneRecordFound(name.to_string()))
    }

    /// Find the record filed under `name` for in-place changes.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NoneRecordFound(name.to_string()))
    }

    /// Remove and return the record filed under `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::NoneRecordFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Birthdays coming up in the next week, counted from the local date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive())
    }

    /// Birthdays coming up in the next week, counted from `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Contacts whose next birthday is at most `window_days` after `today`,
    /// with weekend birthdays moved to the following Monday.
    ///
    /// Sorted by celebration day, then by name.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming: Vec<UpcomingBirthday> = self
            .records()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let day = birthdays::schedule(birthday, today, window_days)?;
                Some(UpcomingBirthday::new(record.name().as_str(), day))
            })
            .collect();

        upcoming.sort_by(|a, b| {
            a.celebration_day
                .cmp(&b.celebration_day)
                .then_with(|| a.name.cmp(&b.name))
        });
        upcoming
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        if let Some(birthday) = birthday {
            record.add_birthday(birthday).unwrap();
        }
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_find_missing_record() {
        let book = AddressBook::new();
        assert_eq!(
            book.find("Ann").unwrap_err(),
            BookError::NoneRecordFound("Ann".to_string())
        );
    }

    #[test]
    fn test_add_then_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("Ann", &["1111111111"], None)).is_none());

        let found = book.find("Ann").unwrap();
        assert_eq!(found.name().as_str(), "Ann");
        assert_eq!(found.phones().len(), 1);
        assert!(book.find("ann").is_err());
    }

    #[test]
    fn test_add_record_replaces_without_merging() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["1111111111"], Some("1990-06-15")));

        let replaced = book.add_record(record("Ann", &["2222222222"], None));
        assert_eq!(replaced.unwrap().phones()[0].as_str(), "1111111111");

        let found = book.find("Ann").unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(found.phones().len(), 1);
        assert_eq!(found.phones()[0].as_str(), "2222222222");
        assert!(found.birthday().is_none());
    }

    #[test]
    fn test_find_mut_then_reinsert() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], None));

        let mut ann = book.find("Ann").unwrap().clone();
        ann.add_phone("1111111111").unwrap();
        book.add_record(ann);

        book.find_mut("Ann").unwrap().add_phone("2222222222").unwrap();
        assert_eq!(book.find("Ann").unwrap().phones().len(), 2);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut_propagates_validation() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], None));

        let err: BookError = book
            .find_mut("Ann")
            .unwrap()
            .add_phone("12")
            .unwrap_err()
            .into();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidPhoneNumberFormat("12".to_string()))
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], None));
        book.add_record(record("Bob", &[], None));

        let removed = book.delete("Ann").unwrap();
        assert_eq!(removed.name().as_str(), "Ann");
        assert!(!book.contains("Ann"));
        assert!(book.contains("Bob"));

        assert_eq!(
            book.delete("Ann").unwrap_err(),
            BookError::NoneRecordFound("Ann".to_string())
        );
    }

    #[test]
    fn test_records_in_name_order() {
        let book: AddressBook = ["Carol", "Ann", "Bob"]
            .into_iter()
            .map(|name| record(name, &[], None))
            .collect();
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Ann", "Bob", "Carol"]);
        assert_eq!((&book).into_iter().count(), 3);
    }

    #[test]
    fn test_upcoming_birthdays_saturday_shift() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], Some("1990-06-15")));

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Ann");
        assert_eq!(upcoming[0].celebration_day_label(), "2024.06.17");
    }

    #[test]
    fn test_upcoming_birthdays_passed_yesterday_excluded() {
        let mut book = AddressBook::new();
        book.add_record(record("Bob", &[], Some("1985-06-09")));
        assert!(book.upcoming_birthdays(date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_skips_records_without_birthday() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &["1111111111"], None));
        book.add_record(record("Bob", &[], None));
        assert!(book.upcoming_birthdays(date(2024, 6, 10)).is_empty());
        assert!(AddressBook::new().upcoming_birthdays(date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_sorted_by_day_then_name() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", &[], Some("1990-06-11")));
        book.add_record(record("Dan", &[], Some("1990-06-16")));
        book.add_record(record("Ann", &[], Some("1990-06-15")));
        book.add_record(record("Eve", &[], Some("1990-06-12")));

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10));
        let listed: Vec<(String, String)> = upcoming
            .iter()
            .map(|u| (u.name.clone(), u.celebration_day_label()))
            .collect();
        assert_eq!(
            listed,
            [
                ("Zed".to_string(), "2024.06.11".to_string()),
                ("Eve".to_string(), "2024.06.12".to_string()),
                ("Ann".to_string(), "2024.06.17".to_string()),
                ("Dan".to_string(), "2024.06.17".to_string()),
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_custom_window() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", &[], Some("1990-06-25")));

        let today = date(2024, 6, 10);
        assert!(book.upcoming_birthdays(today).is_empty());
        let upcoming = book.upcoming_birthdays_within(today, 30);
        assert_eq!(upcoming[0].celebration_day_label(), "2024.06.25");
    }
}
