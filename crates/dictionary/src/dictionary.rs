use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
    pub license: Option<License>,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Exclamation,
    Determiner,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordDefinition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl From<&str> for PartOfSpeech {
    fn from(value: &str) -> Self {
        match &value.trim().to_lowercase()[..] {
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            "exclamation" => Self::Exclamation,
            "determiner" => Self::Determiner,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PartOfSpeech::Noun => write!(f, "noun"),
            PartOfSpeech::Pronoun => write!(f, "pronoun"),
            PartOfSpeech::Verb => write!(f, "verb"),
            PartOfSpeech::Adjective => write!(f, "adjective"),
            PartOfSpeech::Adverb => write!(f, "adverb"),
            PartOfSpeech::Preposition => write!(f, "preposition"),
            PartOfSpeech::Conjunction => write!(f, "conjunction"),
            PartOfSpeech::Interjection => write!(f, "interjection"),
            PartOfSpeech::Exclamation => write!(f, "exclamation"),
            PartOfSpeech::Determiner => write!(f, "determiner"),
            PartOfSpeech::Other(name) => write!(f, "{name}"),
        }
    }
}

impl Word {
    /// The transcription shown next to the headword.
    pub fn display_phonetic(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .or_else(|| self.phonetics.iter().find_map(|p| p.text.as_deref()))
    }

    /// First pronunciation recording, if any variant has one.
    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics.iter().find_map(|p| p.audio.as_deref())
    }

    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        dedup(self.meanings.iter().flat_map(|meaning| {
            meaning.synonyms.iter().chain(
                meaning
                    .definitions
                    .iter()
                    .flat_map(|definition| definition.synonyms.iter()),
            )
        }))
    }

    pub fn all_antonyms(&self) -> impl Iterator<Item = &str> {
        dedup(self.meanings.iter().flat_map(|meaning| {
            meaning.antonyms.iter().chain(
                meaning
                    .definitions
                    .iter()
                    .flat_map(|definition| definition.antonyms.iter()),
            )
        }))
    }

    /// Folds every entry the API returned for one headword into a single word.
    /// Returns `None` for an empty list.
    pub fn merge(entries: impl IntoIterator<Item = Word>) -> Option<Word> {
        let mut entries = entries.into_iter();
        let mut merged = entries.next()?;
        for entry in entries {
            if merged.phonetic.is_none() {
                merged.phonetic = entry.phonetic;
            }
            if merged.origin.is_none() {
                merged.origin = entry.origin;
            }
            if merged.license.is_none() {
                merged.license = entry.license;
            }
            merged.phonetics.extend(entry.phonetics);
            merged.meanings.extend(entry.meanings);
            for url in entry.source_urls {
                if !merged.source_urls.contains(&url) {
                    merged.source_urls.push(url);
                }
            }
        }
        Some(merged)
    }
}

fn dedup<'a>(items: impl Iterator<Item = &'a String>) -> impl Iterator<Item = &'a str> {
    let mut seen: Vec<&'a str> = Vec::new();
    items.filter_map(move |item| {
        if seen.contains(&&item[..]) {
            None
        } else {
            seen.push(item.as_str());
            Some(&item[..])
        }
    })
}
