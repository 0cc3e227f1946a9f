//! Address book container
//!
//! Maps contact names to records and answers the upcoming-birthday query.
//! Records are kept in a `BTreeMap` so listing output is deterministic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::birthday::DATE_FORMAT;
use super::Record;

/// Number of days ahead a birthday counts as upcoming
const UPCOMING_HORIZON_DAYS: i64 = 7;

/// The full set of records, keyed by contact name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// One entry of the upcoming-birthday query result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// Date the birthday should be acknowledged, `DD.MM.YYYY`,
    /// after the weekend shift
    pub congratulation_date: String,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing record with the same name
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name; no-op if absent
    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }

    /// Number of records in the book
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Compute the birthdays to acknowledge within the next week
    ///
    /// For each record with a birthday, take this year's occurrence of its
    /// month/day; if that is strictly before `today`, take next year's.
    /// A Saturday occurrence shifts forward 2 days and a Sunday occurrence
    /// 1 day, so congratulations land on a weekday. The entry is included
    /// when the shifted date is at most 7 days out. The day count is taken
    /// from the shifted date and has no lower bound; callers depend on the
    /// literal computation, so it stays as is.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let birth_date = birthday.date();

            let mut occurrence = occurrence_in_year(birth_date, today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birth_date, today.year() + 1);
            }

            let congratulation = shift_off_weekend(occurrence);
            let days_to_birthday = (congratulation - today).num_days();

            if days_to_birthday <= UPCOMING_HORIZON_DAYS {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation.format(DATE_FORMAT).to_string(),
                });
            }
        }

        upcoming
    }
}

/// This year's occurrence of a birthday's month/day
///
/// Feb 29 birthdays fall back to Mar 1 when `year` is not a leap year.
fn occurrence_in_year(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 always exists"))
}

/// Shift a weekend date to the following Monday
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
