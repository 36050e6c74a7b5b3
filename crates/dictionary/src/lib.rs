use dictionary_api::{get_definition, DICTIONARY_API_URL};

mod dictionary;
mod dictionary_api;

pub use dictionary::{License, PartOfSpeech, Phonetic, Word, WordDefinition, WordMeaning};
pub use reqwest::{StatusCode, Url};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("could not decode the response: {0}")]
    Deserialize(reqwest::Error),
    #[error("unexpected response status {0}")]
    Status(StatusCode),
    #[error("no definitions found: {0}")]
    NotFound(NotFoundError),
    #[error("{0} cannot be used as a base url")]
    InvalidBaseUrl(String),
}

/// What the API says when it has nothing for a word. Fields are empty when
/// the response carried no explanation.
#[derive(Debug, Clone, Default, PartialEq, thiserror::Error)]
#[error("{title}")]
pub struct NotFoundError {
    pub title: String,
    pub message: String,
    pub resolution: String,
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(
            Url::parse(DICTIONARY_API_URL).expect("the built-in dictionary url is valid"),
        )
    }

    /// Points the client at another deployment of the entries endpoint.
    pub fn with_base_url(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
