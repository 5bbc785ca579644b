use log::{info, trace};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::{
    model::{AuthorRef, AuthorWorks, Book, Work},
    Error, ErrorKind,
};

use super::Client;

const OPEN_LIBRARY_URL: &str = "https://openlibrary.org";

/// Number of works requested per author. The source defaults to 50 which
/// truncates prolific authors, so one enlarged page is fetched instead of
/// paginating.
const WORKS_PAGE_LIMIT: u32 = 1000;

pub(crate) fn book_by_isbn<C: Client>(isbn: &str) -> Result<Book, Error> {
    info!("Searching for ISBN '{isbn}' on Open Library");
    let url = format!("{OPEN_LIBRARY_URL}/isbn/{isbn}.json");

    let client = C::default();
    let body = client.get_text(&url)?.ok_or_else(|| {
        Error::new(
            ErrorKind::BookNotFound,
            format!("Book ISBN:{isbn} not found - most likely invalid ISBN provided"),
        )
    })?;

    let book: BookResponse = decode_lenient(&body);

    // Some endpoints report a missing record inside a 200 payload rather than
    // by status, both paths must stay distinguishable.
    if !book.error.is_empty() {
        return Err(Error::new(
            ErrorKind::BookUnresolved,
            format!("Book not found by provided ISBN {isbn}"),
        ));
    }

    trace!("Request was successful");

    Ok(book.into())
}

pub(crate) fn author_works<C: Client>(author: &AuthorRef) -> Result<AuthorWorks, Error> {
    let key = &author.key;
    info!("Fetching author profile for '{key}'");

    let client = C::default();
    let url = format!("{OPEN_LIBRARY_URL}{key}.json");
    let body = client
        .get_text(&url)?
        .ok_or_else(|| Error::new(ErrorKind::AuthorNotFound, format!("Author {key} not found")))?;
    let profile: AuthorResponse = decode_lenient(&body);

    if !profile.alternate_names.is_empty() {
        trace!(
            "'{}' is also known under {} other name(s)",
            profile.name,
            profile.alternate_names.len()
        );
    }

    trace!("Fetching works for '{key}' with a page limit of {WORKS_PAGE_LIMIT}");
    let url = format!("{OPEN_LIBRARY_URL}{key}/works.json?limit={WORKS_PAGE_LIMIT}");
    // The works endpoint sometimes answers 404 for authors without works, an
    // empty page is the correct reading of that rather than a fatal error.
    let works: WorksResponse = client
        .get_text(&url)?
        .map_or_else(WorksResponse::default, |body| decode_lenient(&body));

    trace!(
        "Received {} work(s), source reports a total of {}",
        works.entries.len(),
        works.size
    );

    Ok(AuthorWorks {
        name: profile.name,
        revision: profile.revision,
        books: works.entries.into_iter().map(Work::from).collect(),
    })
}

pub(crate) fn works_by_authors<C: Client>(
    authors: &[AuthorRef],
) -> Result<Vec<AuthorWorks>, Error> {
    let mut output = Vec::with_capacity(authors.len());

    // Strictly sequential, the next author is only fetched once the previous
    // aggregate is complete and the first failure abandons the whole run.
    for author in authors {
        output.push(author_works::<C>(author)?);
    }

    Ok(output)
}

/// Decodes a response body, falling back to an all-default value when the
/// body is not valid JSON at all.
fn decode_lenient<T>(body: &str) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_str(body).unwrap_or_default()
}

/// Field-level tolerant deserializer: a field that fails to decode becomes
/// its zero value instead of failing the surrounding document.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
struct BookResponse {
    #[serde(default, deserialize_with = "lenient")]
    full_title: String,
    #[serde(default, deserialize_with = "lenient")]
    authors: Vec<AuthorKey>,
    #[serde(default, deserialize_with = "lenient")]
    error: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorKey {
    #[serde(default, deserialize_with = "lenient")]
    key: String,
}

#[derive(Debug, Default, Deserialize)]
struct AuthorResponse {
    #[serde(default, deserialize_with = "lenient")]
    name: String,
    #[serde(default, deserialize_with = "lenient")]
    revision: u32,
    // Part of the source schema, unused in the listing.
    #[serde(default, deserialize_with = "lenient")]
    alternate_names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WorksResponse {
    #[serde(default, deserialize_with = "lenient")]
    size: u32,
    #[serde(default, deserialize_with = "lenient")]
    entries: Vec<WorkEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkEntry {
    #[serde(default, deserialize_with = "lenient")]
    title: String,
    #[serde(default, deserialize_with = "lenient")]
    revision: u32,
}

impl From<BookResponse> for Book {
    fn from(book: BookResponse) -> Self {
        Self {
            title: book.full_title,
            authors: book
                .authors
                .into_iter()
                .map(|a| AuthorRef { key: a.key })
                .collect(),
        }
    }
}

impl From<WorkEntry> for Work {
    fn from(entry: WorkEntry) -> Self {
        Self {
            title: entry.title,
            revision: entry.revision,
        }
    }
}
