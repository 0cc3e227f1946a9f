//! Command handlers
//!
//! Every handler produces a human-readable message string. Errors never
//! escape the dispatch boundary: [`dispatch`] converts them to the
//! matching user-facing message, so a bad input can never end the session.

use chrono::NaiveDate;

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Record};

use super::command::Command;

/// Execute a command against the book, `today` anchoring the
/// upcoming-birthday query
pub fn execute(book: &mut AddressBook, command: &Command, today: NaiveDate) -> ContactResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".into()),
        Command::Add { name, phone } => add_contact(book, name, phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_contact(book, name, old_phone, new_phone),
        Command::Phone { name } => show_phones(book, name),
        Command::All => show_all(book),
        Command::AddBirthday { name, date } => add_birthday(book, name, date),
        Command::ShowBirthday { name } => show_birthday(book, name),
        Command::Birthdays => show_upcoming_birthdays(book, today),
        Command::Exit => Ok("Book saved. Good bye!".into()),
        Command::Unknown => Ok("Invalid command.".into()),
    }
}

/// Execute a command, converting any error to its user-facing message
pub fn dispatch(book: &mut AddressBook, command: &Command, today: NaiveDate) -> String {
    execute(book, command, today).unwrap_or_else(|e| error_message(&e))
}

/// Map an error kind to the message the loop prints
pub fn error_message(err: &ContactError) -> String {
    match err {
        ContactError::NotFound { .. } => "No such name.".into(),
        ContactError::Validation(_) => "Enter the argument for the command.".into(),
        ContactError::ArgumentCount(_) => "Not enough arguments.".into(),
        other => other.to_string(),
    }
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> ContactResult<String> {
    let message = if book.find(name).is_none() {
        book.add_record(Record::new(name));
        "Contact added."
    } else {
        "Contact updated."
    };

    // The record stays in the book even when the phone is rejected
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }

    Ok(message.into())
}

fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> ContactResult<String> {
    let Some(record) = book.find_mut(name) else {
        return Ok("Contact not found.".into());
    };

    // A bad new number reports its specific validation message here
    // instead of the generic one from the dispatch boundary
    match record.edit_phone(old_phone, new_phone) {
        Ok(()) => Ok("Contact changed.".into()),
        Err(ContactError::Validation(msg)) => Ok(msg),
        Err(e) => Err(e),
    }
}

fn show_phones(book: &AddressBook, name: &str) -> ContactResult<String> {
    match book.find(name) {
        Some(record) => Ok(record.to_string()),
        None => Ok("Contact not found.".into()),
    }
}

fn show_all(book: &AddressBook) -> ContactResult<String> {
    if book.is_empty() {
        return Ok("No contacts.".into());
    }

    let lines: Vec<String> = book.records().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}

fn add_birthday(book: &mut AddressBook, name: &str, date: &str) -> ContactResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(date)?;
            Ok(format!("Birthday added for {}", name))
        }
        None => Ok(format!("Contact {} not found", name)),
    }
}

fn show_birthday(book: &AddressBook, name: &str) -> ContactResult<String> {
    match book.find(name).and_then(|r| r.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday is {}", name, birthday)),
        None => Ok(format!("No birthday found for {}", name)),
    }
}

fn show_upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> ContactResult<String> {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".into());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|u| format!("{}: {}", u.name, u.congratulation_date))
        .collect();
    Ok(lines.join("\n"))
}
