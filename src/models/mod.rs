//! Core data models for the contact book

pub mod birthday;
pub mod book;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use book::{AddressBook, UpcomingBirthday};
pub use phone::Phone;
pub use record::Record;
