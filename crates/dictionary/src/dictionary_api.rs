use reqwest::{StatusCode, Url};

use crate::{DictionaryError, Word};

pub const DEFAULT_ENDPOINT: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, DictionaryError> {
    let url = Url::parse(endpoint)
        .map_err(|error| DictionaryError::InvalidEndpoint(format!("{endpoint}: {error}")))?;
    if url.cannot_be_a_base() {
        return Err(DictionaryError::InvalidEndpoint(format!(
            "{endpoint}: cannot carry a path"
        )));
    }
    Ok(url)
}

/// `{endpoint}/{word}`, with the word percent-encoded as a single path segment.
pub(crate) fn entry_url(endpoint: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidEndpoint(format!("{endpoint}: cannot carry a path")))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    endpoint: &Url,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = entry_url(endpoint, word)?;
    tracing::debug!(%url, "requesting definition");
    let res = client
        .get(url)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if !status.is_success() {
        return Err(DictionaryError::NotFound(NotFoundError::new(word, status)));
    }
    let words = res
        .json::<Vec<Word>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    words
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::NotFound(NotFoundError::new(word, status)))
}

#[derive(Debug, thiserror::Error)]
#[error("Word not found")]
pub struct NotFoundError {
    word: String,
    status: StatusCode,
}

impl NotFoundError {
    pub fn new(word: &str, status: StatusCode) -> Self {
        Self {
            word: word.to_owned(),
            status,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}
