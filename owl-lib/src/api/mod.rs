pub(crate) mod open_library;

pub trait Client
where
    Self: Default,
{
    /// Sends a GET request and returns the response body, or `None` when the
    /// endpoint answers with a not-found status.
    ///
    /// Open Library signals absence by status on some endpoints and inside the
    /// payload on others, so callers map a `None` to the right error kind for
    /// the resource they asked for.
    fn get_text(&self, url: &str) -> Result<Option<String>, Error>;
}

impl Client for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<Option<String>, Error> {
        let resp = self
            .get(url)
            .send()
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = resp.text().map_err(|e| Error::wrap(ErrorKind::IO, e))?;
        Ok(Some(text))
    }
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, reset_url_sink, MockClient, NetworkErrorProducer,
    NotFoundProducer, Producer, URL_SINK,
};

use crate::{Error, ErrorKind};
