//! Storage layer for the contact book
//!
//! Persists the whole address book as one JSON file with atomic writes
//! (write to temp, fsync, then rename) so a crash mid-save never corrupts
//! the previous snapshot.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ContactError;
use crate::models::AddressBook;

/// Persists an [`AddressBook`] snapshot at a fixed path
pub struct BookStore {
    path: PathBuf,
}

impl BookStore {
    /// Create a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this store reads from and writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book from disk
    ///
    /// A missing file yields a fresh empty book. Any other failure (an
    /// unreadable or corrupt file) is an error; startup does not attempt
    /// to recover from a damaged snapshot.
    pub fn load(&self) -> Result<AddressBook, ContactError> {
        if !self.path.exists() {
            return Ok(AddressBook::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            ContactError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            ContactError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Save the address book to disk, overwriting any existing snapshot
    pub fn save(&self, book: &AddressBook) -> Result<(), ContactError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ContactError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory so the rename stays atomic
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| ContactError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, book)
            .map_err(|e| ContactError::Storage(format!("Failed to serialize book: {}", e)))?;

        writer
            .flush()
            .map_err(|e| ContactError::Storage(format!("Failed to flush book: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ContactError::Storage(format!("Failed to sync book: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            ContactError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BookStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BookStore::new(temp_dir.path().join("addressbook.json"));
        (temp_dir, store)
    }

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();

        let mut john = Record::new("John");
        john.add_phone("0123456789").unwrap();
        john.add_phone("9876543210").unwrap();
        john.add_birthday("02.01.1990").unwrap();
        book.add_record(john);

        let mut jane = Record::new("Jane");
        jane.add_phone("5555555555").unwrap();
        book.add_record(jane);

        book
    }

    #[test]
    fn test_load_missing_file_returns_empty_book() {
        let (_temp_dir, store) = create_test_store();

        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let book = sample_book();

        store.save(&book).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, book);
        let john = loaded.find("John").unwrap();
        assert_eq!(john.phones().len(), 2);
        assert_eq!(john.birthday().map(|b| b.as_str()), Some("02.01.1990"));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let (_temp_dir, store) = create_test_store();

        store.save(&sample_book()).unwrap();
        store.save(&AddressBook::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let (temp_dir, store) = create_test_store();

        store.save(&sample_book()).unwrap();

        assert!(store.path().exists());
        assert!(!temp_dir.path().join("addressbook.json.tmp").exists());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = BookStore::new(temp_dir.path().join("nested").join("addressbook.json"));

        store.save(&AddressBook::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "not json at all").unwrap();

        assert!(store.load().is_err());
    }
}
