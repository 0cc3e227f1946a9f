//! Validated phone number
//!
//! A phone number is stored as its raw string form; the only accepted
//! format is exactly 10 ASCII decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContactError;

/// A validated 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the format
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Validation` unless the input is exactly
    /// 10 ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ContactError> {
        let value = value.into();
        if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(ContactError::Validation(
                "Phone number must be 10 digits".into(),
            ))
        }
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone() {
        let phone = Phone::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
        assert_eq!(phone.to_string(), "0123456789");
    }

    #[test]
    fn test_too_short() {
        assert!(Phone::new("123456789").is_err());
    }

    #[test]
    fn test_too_long() {
        assert!(Phone::new("12345678901").is_err());
    }

    #[test]
    fn test_non_digit() {
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("123-456-78").is_err());
        // Unicode digits are not ASCII digits
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_empty() {
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn test_error_kind() {
        let err = Phone::new("abc").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serialization_is_transparent() {
        let phone = Phone::new("0123456789").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0123456789\"");

        let back: Phone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
    }
}
