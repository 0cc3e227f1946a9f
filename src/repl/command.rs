//! Command-line parsing for the interactive loop
//!
//! The first whitespace token selects the command (case-insensitive); the
//! remaining tokens are its arguments. A known command with too few tokens
//! parses to an `ArgumentCount` error so the dispatch boundary can turn it
//! into a user-facing message.

use crate::error::{ContactError, ContactResult};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Print a greeting
    Hello,
    /// Create a contact if absent and append a phone number
    Add { name: &'a str, phone: &'a str },
    /// Replace a phone number on an existing contact
    Change {
        name: &'a str,
        old_phone: &'a str,
        new_phone: &'a str,
    },
    /// Print a contact's phone numbers
    Phone { name: &'a str },
    /// Print every contact
    All,
    /// Set a contact's birthday
    AddBirthday { name: &'a str, date: &'a str },
    /// Print a contact's birthday
    ShowBirthday { name: &'a str },
    /// Print the upcoming-birthday list
    Birthdays,
    /// Persist the book and terminate (`close` or `exit`)
    Exit,
    /// Anything else
    Unknown,
}

impl<'a> Command<'a> {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line. Unrecognized command words
    /// parse to [`Command::Unknown`] rather than an error.
    pub fn parse(line: &'a str) -> ContactResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match first.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add {
                name: arg(&args, 0, "add")?,
                phone: arg(&args, 1, "add")?,
            },
            "change" => Self::Change {
                name: arg(&args, 0, "change")?,
                old_phone: arg(&args, 1, "change")?,
                new_phone: arg(&args, 2, "change")?,
            },
            "phone" => Self::Phone {
                name: arg(&args, 0, "phone")?,
            },
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday {
                name: arg(&args, 0, "add-birthday")?,
                date: arg(&args, 1, "add-birthday")?,
            },
            "show-birthday" => Self::ShowBirthday {
                name: arg(&args, 0, "show-birthday")?,
            },
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        };

        Ok(Some(command))
    }
}

/// Fetch a required positional argument
fn arg<'a>(args: &[&'a str], index: usize, command: &'static str) -> ContactResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(ContactError::ArgumentCount(command))
}
