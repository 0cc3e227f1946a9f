//! contact-book-cli - Terminal-based contact book with birthday reminders
//!
//! This library provides the core functionality for the contact book
//! application: an interactive REPL over an in-memory address book that is
//! persisted to disk between sessions and can report which birthdays fall
//! within the next week (weekend dates shift to the following Monday).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (phones, birthdays, records, the book)
//! - `storage`: JSON file storage layer
//! - `repl`: Command parsing, handlers, and the interactive loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book_cli::config::BookPaths;
//! use contact_book_cli::storage::BookStore;
//!
//! let paths = BookPaths::new()?;
//! let store = BookStore::new(paths.book_file());
//! let book = store.load()?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use error::ContactError;
