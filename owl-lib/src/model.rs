//! Domain types for books, authors and their works.

use serde::Serialize;

/// A book resolved from an ISBN lookup.
///
/// Only lives long enough for its [`AuthorRef`]s to be walked - the listing is
/// keyed on authors, not on the book itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    /// Full title of the book.
    pub title: String,
    /// References to the book's authors, in source order.
    pub authors: Vec<AuthorRef>,
}

/// An opaque reference to an author resource, e.g. `/authors/OL23919A`.
///
/// The key is a relative resource path which resolves to an author profile
/// via a second lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorRef {
    /// Relative resource path of the author.
    pub key: String,
}

/// One author together with their full list of works.
///
/// This is the unit of the final listing: one record per [`AuthorRef`] of the
/// book, sortable and serializable as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorWorks {
    /// Name of the author.
    pub name: String,
    /// Revision counter of the author record in the source system.
    pub revision: u32,
    /// The author's works, in the order the source returned them.
    pub books: Vec<Work>,
}

/// A single work in an author's bibliography.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Work {
    /// Title of the work.
    pub title: String,
    /// Revision counter of the work record in the source system.
    pub revision: u32,
}
