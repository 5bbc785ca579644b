#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions)]

use std::process;

use clap::Parser;
use log::info;
use owl::{sort_authors, Error, ErrorKind, SortOrder};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                clap::ErrorKind::DisplayHelp | clap::ErrorKind::DisplayVersion => 0,
                _ => exit_code::USAGE,
            };
            // clap renders its own usage/help text and picks the right stream
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = try_main(cli) {
        eprintln!("{err}");
        process::exit(exit_code::from_error(&err));
    }
}

fn try_main(cli: Cli) -> Result<(), Error> {
    let Cli {
        isbn,
        order,
        verbosity,
        quiet,
    } = cli;

    setup_errlog(verbosity as usize, quiet)?;

    let order = SortOrder::from_arg(order.as_deref());

    let book = owl::book_by_isbn(&isbn)?;
    info!("'{}' has {} author(s)", book.title, book.authors.len());

    let mut authors = owl::works_by_authors(&book.authors)?;
    sort_authors(&mut authors, order);

    let yaml =
        serde_yaml::to_string(&authors).map_err(|e| Error::wrap(ErrorKind::Unexpected, e))?;
    print!("{yaml}");
    Ok(())
}

fn setup_errlog(verbosity: usize, quiet: bool) -> Result<(), Error> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .map_err(|e| Error::wrap(ErrorKind::Unexpected, e))
}

#[derive(Parser)]
#[clap(name = "owl")]
#[clap(about = "List every work by the authors of a book, looked up by ISBN")]
#[clap(version, author)]
struct Cli {
    /// ISBN of the book to search for
    isbn: String,

    /// Sort direction of the author listing, `asc` or `desc`
    ///
    /// Only a case-insensitive `desc` selects the descending order; any
    /// other value falls back to `asc`.
    order: Option<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Prevents the program from logging to stderr, errors will still be printed.
    #[clap(short, long)]
    quiet: bool,
}

/// Exit codes per fatal condition, part of the CLI contract.
mod exit_code {
    use owl::{Error, ErrorKind};

    /// Missing ISBN argument or otherwise bad CLI input.
    pub const USAGE: i32 = 1;
    /// The book lookup answered with a not-found status.
    pub const BOOK_NOT_FOUND: i32 = 2;
    /// The book lookup payload carried an error field.
    pub const BOOK_UNRESOLVED: i32 = 3;
    /// An author profile lookup answered with a not-found status.
    pub const AUTHOR_NOT_FOUND: i32 = 4;
    /// A connect or read failure on any request.
    pub const TRANSPORT: i32 = 5;
    /// Anything outside of the expected failure conditions.
    pub const UNEXPECTED: i32 = 6;

    pub const fn from_error(err: &Error) -> i32 {
        match err.kind() {
            ErrorKind::BookNotFound => BOOK_NOT_FOUND,
            ErrorKind::BookUnresolved => BOOK_UNRESOLVED,
            ErrorKind::AuthorNotFound => AUTHOR_NOT_FOUND,
            ErrorKind::IO => TRANSPORT,
            ErrorKind::Unexpected => UNEXPECTED,
        }
    }
}
