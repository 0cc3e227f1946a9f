//! Validated birthday
//!
//! Birthdays are stored in their raw `DD.MM.YYYY` string form so a
//! save/load round-trip reproduces exactly what the user typed. The day
//! and month must be zero-padded and the string must denote a real
//! calendar date ("31.02.2020" is rejected).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// The only accepted input and display format
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday in `DD.MM.YYYY` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new birthday, validating the format
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` unless the input is a
    /// zero-padded `DD.MM.YYYY` string denoting a real calendar date.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactError> {
        let value = value.into();
        if !has_strict_shape(&value) {
            return Err(ContactError::Validation(
                "Invalid date format. Use DD.MM.YYYY".into(),
            ));
        }
        // Shape is right; chrono rejects impossible dates like 31.02.2020
        NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| {
            ContactError::Validation("Invalid date format. Use DD.MM.YYYY".into())
        })?;
        Ok(Self(value))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored string into a calendar date
    pub fn date(&self) -> NaiveDate {
        // Validated at construction, so this cannot fail
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).expect("birthday validated at construction")
    }
}

/// Check the `DD.MM.YYYY` shape: two digits, dot, two digits, dot, four digits
fn has_strict_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit())
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
