//! End-to-end REPL session tests
//!
//! Drives the compiled binary with piped stdin and a temporary data
//! directory (via the `CONTACT_BOOK_DATA_DIR` override) to verify the
//! full load / dispatch / save cycle.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contactbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contactbook").unwrap();
    cmd.env("CONTACT_BOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_full_session() {
    let data_dir = TempDir::new().unwrap();

    contactbook(&data_dir)
        .write_stdin(
            "hello\n\
             add John 0123456789\n\
             add John 9876543210\n\
             add-birthday John 02.01.1990\n\
             phone John\n\
             show-birthday John\n\
             all\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the contact book!"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Contact updated."))
        .stdout(predicate::str::contains("Birthday added for John"))
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 0123456789; 9876543210",
        ))
        .stdout(predicate::str::contains("John's birthday is 02.01.1990"))
        .stdout(predicate::str::ends_with("Book saved. Good bye!\n"));
}

#[test]
fn test_contacts_persist_across_runs() {
    let data_dir = TempDir::new().unwrap();

    contactbook(&data_dir)
        .write_stdin("add John 0123456789\nadd-birthday John 02.01.1990\nclose\n")
        .assert()
        .success();

    assert!(data_dir.path().join("data").join("addressbook.json").exists());

    contactbook(&data_dir)
        .write_stdin("phone John\nshow-birthday John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 0123456789",
        ))
        .stdout(predicate::str::contains("John's birthday is 02.01.1990"));
}

#[test]
fn test_invalid_command_does_not_end_session() {
    let data_dir = TempDir::new().unwrap();

    contactbook(&data_dir)
        .write_stdin("frobnicate\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn test_error_messages() {
    let data_dir = TempDir::new().unwrap();

    contactbook(&data_dir)
        .write_stdin(
            "add John\n\
             add John 123\n\
             change Jane 0000000000 1111111111\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough arguments."))
        .stdout(predicate::str::contains("Enter the argument for the command."))
        .stdout(predicate::str::contains("Contact not found."));
}

#[test]
fn test_corrupt_snapshot_is_fatal() {
    let data_dir = TempDir::new().unwrap();
    let book_file = data_dir.path().join("data").join("addressbook.json");
    std::fs::create_dir_all(book_file.parent().unwrap()).unwrap();
    std::fs::write(&book_file, "not json at all").unwrap();

    contactbook(&data_dir).write_stdin("exit\n").assert().failure();
}
