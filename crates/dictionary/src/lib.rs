use dictionary_api::{get_definition, parse_endpoint};

mod dictionary;
mod dictionary_api;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
pub use dictionary_api::{NotFoundError, DEFAULT_ENDPOINT};
pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("{0}")]
    Fetch(reqwest::Error),
    #[error("{0}")]
    Deserialize(reqwest::Error),
    #[error(transparent)]
    NotFound(NotFoundError),
    #[error("invalid dictionary endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Anything that can turn a word into its dictionary entry.
#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError>;
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: reqwest::Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is valid"),
        }
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, DictionaryError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.endpoint, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Lookup for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_definition(word).await
    }
}
