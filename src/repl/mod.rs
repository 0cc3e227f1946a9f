//! Interactive read/dispatch/print loop
//!
//! The loop is generic over its input and output streams so tests can
//! drive a full session with in-memory buffers.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{dispatch, error_message, execute};

use std::io::{BufRead, Write};

use crate::error::ContactResult;
use crate::models::AddressBook;
use crate::storage::BookStore;

/// Run the interactive session until `close`/`exit` or end of input
///
/// The book is saved exactly once, when the session ends. End of input
/// (for example a closed pipe) ends the session the same way an explicit
/// `exit` does, so a scripted run never loses data.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    store: &BookStore,
    mut input: R,
    output: &mut W,
) -> ContactResult<()> {
    writeln!(output, "Welcome to the contact book!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => {
                let today = chrono::Local::now().date_naive();
                let message = handlers::dispatch(book, &command, today);
                writeln!(output, "{}", message)?;
            }
            Err(e) => {
                writeln!(output, "{}", handlers::error_message(&e))?;
            }
        }
    }

    store.save(book)?;
    writeln!(output, "Book saved. Good bye!")?;
    Ok(())
}
