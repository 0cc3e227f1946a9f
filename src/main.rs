use std::io;

use anyhow::Result;

use contact_book_cli::config::BookPaths;
use contact_book_cli::repl;
use contact_book_cli::storage::BookStore;

fn main() -> Result<()> {
    // Resolve the data directory and load the persisted book.
    // A corrupt snapshot is fatal here; only a missing file yields an
    // empty book.
    let paths = BookPaths::new()?;
    paths.ensure_directories()?;

    let store = BookStore::new(paths.book_file());
    let mut book = store.load()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut book, &store, stdin.lock(), &mut stdout)?;

    Ok(())
}
