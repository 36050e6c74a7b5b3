use std::{fmt, str::FromStr};

use dictionary::{Dictionary, DictionaryError, Word};

pub const EMPTY_QUERY_MESSAGE: &str = "Whoops, can't be empty…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Mono,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font {0:?}, expected sans, serif or mono")]
pub struct UnknownFontFamily(String);

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::SansSerif, FontFamily::Serif, FontFamily::Mono];

    pub fn label(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Sans Serif",
            FontFamily::Serif => "Serif",
            FontFamily::Mono => "Mono",
        }
    }

    /// Font stack a web front end would apply for this family.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::SansSerif => "Inter, sans-serif",
            FontFamily::Serif => "Lora, serif",
            FontFamily::Mono => "Inconsolata, monospace",
        }
    }
}

impl FromStr for FontFamily {
    type Err = UnknownFontFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "sans" | "sans-serif" | "sans serif" | "inter" => Ok(FontFamily::SansSerif),
            "serif" | "lora" => Ok(FontFamily::Serif),
            "mono" | "monospace" | "inconsolata" => Ok(FontFamily::Mono),
            _ => Err(UnknownFontFamily(s.to_owned())),
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected dark or light")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSelector {
    pub family: FontFamily,
    pub open: bool,
}

impl FontSelector {
    pub fn new(family: FontFamily) -> Self {
        Self {
            family,
            open: false,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn select(&mut self, family: FontFamily) {
        self.family = family;
        self.open = false;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelector {
    pub dark: bool,
}

impl ThemeSelector {
    pub fn new(theme: Theme) -> Self {
        Self {
            dark: theme == Theme::Dark,
        }
    }

    /// Starts from the colour scheme the terminal advertises.
    pub fn from_env() -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self {
            dark: prefers_dark(colorfgbg.as_deref()),
        }
    }

    pub fn theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn set(&mut self, dark: bool) {
        self.dark = dark;
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`) in ANSI palette
/// indexes; 7 and 9..=15 are light backgrounds. Dark when unknown.
fn prefers_dark(colorfgbg: Option<&str>) -> bool {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    !matches!(background, Some(7) | Some(9..=15))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub invalid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Invalid,
    Query(String),
}

impl SearchForm {
    pub fn submit(&mut self, input: &str) -> Submission {
        self.query = input.trim().to_owned();
        self.invalid = self.query.is_empty();
        if self.invalid {
            Submission::Invalid
        } else {
            Submission::Query(self.query.clone())
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        self.invalid.then_some(EMPTY_QUERY_MESSAGE)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Loading(String),
    Found(Word),
    NotFound(String),
}

#[derive(Debug, Clone)]
pub struct App {
    pub form: SearchForm,
    pub lookup: LookupState,
    pub font: FontSelector,
    pub theme: ThemeSelector,
}

impl App {
    pub fn new(font: FontFamily, theme: ThemeSelector) -> Self {
        Self {
            form: SearchForm::default(),
            lookup: LookupState::Idle,
            font: FontSelector::new(font),
            theme,
        }
    }

    /// Validates the form. A valid query moves the lookup into `Loading`
    /// and hands back the word to fetch.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        match self.form.submit(input) {
            Submission::Invalid => {
                tracing::debug!("ignoring empty search");
                None
            }
            Submission::Query(word) => {
                self.lookup = LookupState::Loading(word.clone());
                Some(word)
            }
        }
    }

    pub async fn fetch(&mut self, dict: &Dictionary, word: String) {
        let result = dict.get_definition(&word).await;
        self.finish(word, result);
    }

    /// Every failure ends up as the same not-found view.
    pub fn finish(&mut self, word: String, result: Result<Word, DictionaryError>) {
        self.lookup = match result {
            Ok(found) => {
                tracing::info!(word = %found.word, meanings = found.meanings.len(), "definition found");
                LookupState::Found(found)
            }
            Err(DictionaryError::NotFound(reason)) => {
                tracing::info!(word = %word, reason = %reason.message, "no definitions");
                LookupState::NotFound(word)
            }
            Err(error) => {
                tracing::warn!(word = %word, %error, "lookup failed");
                LookupState::NotFound(word)
            }
        };
    }
}
