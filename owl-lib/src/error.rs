pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The errors that may occur when calling the owl functions.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
///
/// Each kind is terminal for the run it occurs in - nothing is caught and
/// retried. Field-level decode problems are not represented here; they
/// degrade to zero values during deserialization instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The error is associated with an underlying IO or transport error.
    IO,
    /// The book lookup endpoint answered with a not-found status.
    BookNotFound,
    /// The book lookup answered but the payload carried an error field.
    BookUnresolved,
    /// An author profile endpoint answered with a not-found status.
    AuthorNotFound,
    /// An error outside of the expected failure conditions.
    Unexpected,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("transport error")?,
            ErrorKind::BookNotFound => f.write_str("book not found")?,
            ErrorKind::BookUnresolved => f.write_str("book lookup failed")?,
            ErrorKind::AuthorNotFound => f.write_str("author not found")?,
            ErrorKind::Unexpected => f.write_str("unexpected error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
