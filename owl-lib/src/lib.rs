#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
pub mod model;
pub mod sort;

pub use error::{Error, ErrorKind};
pub use model::{AuthorRef, AuthorWorks, Book, Work};
pub use sort::{sort_authors, SortOrder};

use log::trace;

type Client = reqwest::blocking::Client;

/// Looks a book up by `isbn` on Open Library.
///
/// The returned [`Book`] carries the author references needed by
/// [`works_by_authors`].
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::BookNotFound`] is returned when the lookup
/// answers with a not-found status, and of kind [`ErrorKind::BookUnresolved`]
/// when the payload itself reports the ISBN as unresolvable - the source
/// signals absence both ways depending on endpoint. Transport failures return
/// an `Err` of kind [`ErrorKind::IO`]. A malformed response body is not an
/// error; its fields degrade to zero values.
#[inline]
pub fn book_by_isbn(isbn: &str) -> Result<Book, Error> {
    trace!("Search book by ISBN of '{isbn}'");
    api::open_library::book_by_isbn::<Client>(isbn)
}

/// Fetches one author's profile and full works list.
///
/// The works page is requested with an enlarged fixed limit rather than
/// paginated, so a single call covers even prolific authors.
///
/// # Errors
///
/// An `Err` of kind [`ErrorKind::AuthorNotFound`] is returned when the
/// profile lookup answers with a not-found status. Transport failures return
/// an `Err` of kind [`ErrorKind::IO`]. A missing or malformed works page is
/// not an error; it degrades to an empty list.
#[inline]
pub fn author_works(author: &AuthorRef) -> Result<AuthorWorks, Error> {
    trace!("Fetch works for author '{}'", author.key);
    api::open_library::author_works::<Client>(author)
}

/// Fetches profile and works for every author reference, strictly in order
/// and strictly sequentially.
///
/// On success the output has exactly one [`AuthorWorks`] per reference, in
/// input order.
///
/// # Errors
///
/// The first failing author fails the whole call with the same errors as
/// [`author_works`]; no partial output is returned.
#[inline]
pub fn works_by_authors(authors: &[AuthorRef]) -> Result<Vec<AuthorWorks>, Error> {
    trace!("Fetch works for {} author(s)", authors.len());
    api::open_library::works_by_authors::<Client>(authors)
}
