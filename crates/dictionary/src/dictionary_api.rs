// https://dictionaryapi.dev/ - free, no key, returns an array of entries per word

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{DictionaryError, License, NotFoundError, Phonetic, Word, WordDefinition, WordMeaning};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
    #[serde(default)]
    pub license: Option<ApiLicense>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLicense {
    pub name: String,
    pub url: String,
}

/// Body the API sends alongside a 404.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiNotFound {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<ApiPhonetic> for Phonetic {
    fn from(value: ApiPhonetic) -> Self {
        Self {
            text: non_empty(value.text),
            audio: non_empty(value.audio),
            source_url: non_empty(value.source_url),
        }
    }
}

impl From<ApiDefinition> for WordDefinition {
    fn from(value: ApiDefinition) -> Self {
        Self {
            definition: value.definition,
            example: non_empty(value.example),
            synonyms: value.synonyms,
            antonyms: value.antonyms,
        }
    }
}

impl From<ApiMeaning> for WordMeaning {
    fn from(value: ApiMeaning) -> Self {
        Self {
            part_of_speech: value.part_of_speech.as_str().into(),
            definitions: value.definitions.into_iter().map(Into::into).collect(),
            synonyms: value.synonyms,
            antonyms: value.antonyms,
        }
    }
}

impl From<ApiEntry> for Word {
    fn from(value: ApiEntry) -> Self {
        Self {
            word: value.word,
            phonetic: non_empty(value.phonetic),
            phonetics: value.phonetics.into_iter().map(Into::into).collect(),
            origin: non_empty(value.origin),
            meanings: value.meanings.into_iter().map(Into::into).collect(),
            license: value.license.map(|license| License {
                name: license.name,
                url: license.url,
            }),
            source_urls: value.source_urls,
        }
    }
}

impl From<ApiNotFound> for NotFoundError {
    fn from(value: ApiNotFound) -> Self {
        Self {
            title: value.title,
            message: value.message,
            resolution: value.resolution,
        }
    }
}

pub(crate) fn definition_url(base: &Url, word: &str) -> Result<Url, DictionaryError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(word);
    Ok(url)
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base: &Url,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = definition_url(base, word)?;
    tracing::debug!(%url, "requesting definition");
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        // the body is informative but optional
        let body = res.json::<ApiNotFound>().await.unwrap_or_default();
        return Err(DictionaryError::NotFound(body.into()));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let entries = res
        .json::<Vec<ApiEntry>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    tracing::debug!(entries = entries.len(), word, "decoded definition");
    Word::merge(entries.into_iter().map(Word::from))
        .ok_or_else(|| DictionaryError::NotFound(NotFoundError::default()))
}
