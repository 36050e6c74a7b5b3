use std::{
    fmt::{self, Display},
    io::IsTerminal,
};

use crossterm::style::{style, Attribute, Color, StyledContent, Stylize};
use dictionary::Word;

use crate::app::{App, FontFamily, LookupState, Theme};

pub const NOT_FOUND_TITLE: &str = "No Definitions Found";
pub const NOT_FOUND_MESSAGE: &str = "Sorry pal, we couldn't find definitions for the word you were looking for. You can try the search again at later time or head to the web instead.";
pub const SEARCH_PLACEHOLDER: &str = "Search for any word...";

const RULE_WIDTH: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub error: Color,
    pub text: Color,
    pub gray: Color,
    pub divider: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let accent = Color::Rgb { r: 164, g: 69, b: 237 };
        let error = Color::Rgb { r: 255, g: 82, b: 82 };
        let gray = Color::Rgb { r: 117, g: 117, b: 117 };
        match theme {
            Theme::Dark => Self {
                accent,
                error,
                text: Color::Rgb { r: 255, g: 255, b: 255 },
                gray,
                divider: Color::Rgb { r: 58, g: 58, b: 58 },
            },
            Theme::Light => Self {
                accent,
                error,
                text: Color::Rgb { r: 45, g: 45, b: 45 },
                gray,
                divider: Color::Rgb { r: 233, g: 233, b: 233 },
            },
        }
    }
}

/// Everything on screen for one state of the app: header, the font menu
/// when it is open, and the search results.
pub struct View<'a> {
    app: &'a App,
    palette: Palette,
    styled: bool,
}

impl<'a> View<'a> {
    /// Styles the output only when stdout is a terminal.
    pub fn new(app: &'a App) -> Self {
        Self {
            app,
            palette: Palette::for_theme(app.theme.theme()),
            styled: std::io::stdout().is_terminal(),
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn font(&self) -> FontFamily {
        self.app.font.family
    }

    fn paint<D: Display>(&self, content: D, color: Color) -> StyledContent<D> {
        self.paint_with(content, color, &[])
    }

    /// Unstyled content writes no escape codes at all.
    fn paint_with<D: Display>(
        &self,
        content: D,
        color: Color,
        attributes: &[Attribute],
    ) -> StyledContent<D> {
        let mut styled = style(content);
        if !self.styled {
            return styled;
        }
        styled = styled.with(color);
        for attribute in attributes {
            styled = styled.attribute(*attribute);
        }
        match self.font() {
            FontFamily::Serif => styled.italic(),
            FontFamily::SansSerif | FontFamily::Mono => styled,
        }
    }

    fn rule(&self, width: usize) -> StyledContent<String> {
        let stroke = match self.font() {
            FontFamily::Mono => "-",
            FontFamily::SansSerif | FontFamily::Serif => "─",
        };
        self.paint(stroke.repeat(width), self.palette.divider)
    }

    fn header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let font = &self.app.font;
        let arrow = if font.open { "▴" } else { "▾" };
        let theme = self.app.theme.theme();
        let moon = match theme {
            Theme::Dark => self.paint("☾", self.palette.accent),
            Theme::Light => self.paint("☾", self.palette.gray),
        };
        writeln!(
            f,
            "{}  {} {}  {} {} {}",
            self.paint("📖 word-finder", self.palette.gray),
            self.paint_with(font.family.label(), self.palette.text, &[Attribute::Bold]),
            self.paint(arrow, self.palette.accent),
            self.paint("│", self.palette.gray),
            moon,
            self.paint(theme, self.palette.text),
        )
    }

    fn font_menu(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for family in FontFamily::ALL {
            let marker = if family == self.font() { "●" } else { " " };
            writeln!(
                f,
                "  {} {}",
                self.paint(marker, self.palette.accent),
                self.paint_with(family.label(), self.palette.text, &[Attribute::Bold]),
            )?;
        }
        Ok(())
    }

    fn word(&self, f: &mut fmt::Formatter, word: &Word) -> fmt::Result {
        writeln!(
            f,
            "{}",
            self.paint_with(&word.word, self.palette.text, &[Attribute::Bold])
        )?;
        if let Some(phonetic) = word.display_phonetic() {
            writeln!(f, "{}", self.paint(phonetic, self.palette.accent))?;
        }
        if let Some(audio) = word.audio_url() {
            writeln!(
                f,
                "{} {}",
                self.paint("▶", self.palette.accent),
                self.paint_with(audio_link(audio), self.palette.gray, &[Attribute::Underlined]),
            )?;
        }
        for meaning in &word.meanings {
            writeln!(f)?;
            writeln!(
                f,
                "{} {}",
                self.paint_with(&meaning.part_of_speech, self.palette.text, &[Attribute::Bold]),
                self.rule(RULE_WIDTH),
            )?;
            writeln!(f, "{}", self.paint("Meaning", self.palette.gray))?;
            for definition in &meaning.definitions {
                writeln!(
                    f,
                    "  {} {}",
                    self.paint("•", self.palette.accent),
                    self.paint(&definition.definition, self.palette.text),
                )?;
                if let Some(example) = &definition.example {
                    writeln!(
                        f,
                        "    {}",
                        self.paint(format!("“{example}”"), self.palette.gray)
                    )?;
                }
            }
            self.related(f, "Synonyms", &meaning.synonyms)?;
            self.related(f, "Antonyms", &meaning.antonyms)?;
        }
        if let Some(origin) = &word.origin {
            writeln!(f)?;
            writeln!(
                f,
                "{} {}",
                self.paint("Origin", self.palette.gray),
                self.paint(origin, self.palette.text),
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.rule(RULE_WIDTH + 12))?;
        if !word.source_urls.is_empty() {
            writeln!(f, "{}", self.paint("Source", self.palette.gray))?;
            for url in &word.source_urls {
                writeln!(
                    f,
                    "  {}",
                    self.paint_with(url, self.palette.text, &[Attribute::Underlined])
                )?;
            }
        }
        if let Some(license) = &word.license {
            writeln!(
                f,
                "{} {} ({})",
                self.paint("License", self.palette.gray),
                self.paint(&license.name, self.palette.text),
                self.paint(&license.url, self.palette.gray),
            )?;
        }
        Ok(())
    }

    fn related(&self, f: &mut fmt::Formatter, label: &str, words: &[String]) -> fmt::Result {
        if words.is_empty() {
            return Ok(());
        }
        writeln!(
            f,
            "{} {}",
            self.paint(label, self.palette.gray),
            self.paint_with(words.join(", "), self.palette.accent, &[Attribute::Bold]),
        )
    }

    fn not_found(&self, f: &mut fmt::Formatter, word: &str) -> fmt::Result {
        writeln!(f, "😕")?;
        writeln!(
            f,
            "{} {}",
            self.paint_with(NOT_FOUND_TITLE, self.palette.text, &[Attribute::Bold]),
            self.paint(format!("for “{word}”"), self.palette.gray),
        )?;
        writeln!(f, "{}", self.paint(NOT_FOUND_MESSAGE, self.palette.gray))
    }
}

/// The API sometimes hands out protocol-relative audio links.
fn audio_link(audio: &str) -> String {
    if audio.starts_with("//") {
        format!("https:{audio}")
    } else {
        audio.to_owned()
    }
}

impl Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.header(f)?;
        if self.app.font.open {
            self.font_menu(f)?;
        }
        writeln!(f)?;
        if let Some(message) = self.app.form.message() {
            writeln!(f, "{}", self.paint(message, self.palette.error))?;
            writeln!(f)?;
        }
        match &self.app.lookup {
            LookupState::Idle => writeln!(f, "{}", self.paint(SEARCH_PLACEHOLDER, self.palette.gray)),
            LookupState::Loading(word) => writeln!(
                f,
                "{}",
                self.paint(format!("Looking up “{word}”…"), self.palette.gray)
            ),
            LookupState::Found(word) => self.word(f, word),
            LookupState::NotFound(word) => self.not_found(f, word),
        }
    }
}

#[cfg(test)]
mod tests {
    use dictionary::{License, Phonetic, WordDefinition, WordMeaning};

    use super::*;
    use crate::app::ThemeSelector;

    fn keyboard() -> Word {
        Word {
            word: "keyboard".to_owned(),
            phonetic: Some("/ˈkiːbɔːd/".to_owned()),
            phonetics: vec![Phonetic {
                text: Some("/ˈkiːbɔːd/".to_owned()),
                audio: Some("//ssl.gstatic.com/keyboard.mp3".to_owned()),
                source_url: None,
            }],
            origin: None,
            meanings: vec![WordMeaning {
                part_of_speech: "noun".into(),
                definitions: vec![WordDefinition {
                    definition: "A set of keys used to operate a typewriter, computer etc.".to_owned(),
                    example: Some("Keyboarding is the part of this job I hate the most.".to_owned()),
                    synonyms: Vec::new(),
                    antonyms: Vec::new(),
                }],
                synonyms: vec!["electronic keyboard".to_owned()],
                antonyms: Vec::new(),
            }],
            license: Some(License {
                name: "CC BY-SA 3.0".to_owned(),
                url: "https://creativecommons.org/licenses/by-sa/3.0".to_owned(),
            }),
            source_urls: vec!["https://en.wiktionary.org/wiki/keyboard".to_owned()],
        }
    }

    fn app() -> App {
        App::new(FontFamily::SansSerif, ThemeSelector::new(Theme::Dark))
    }

    #[test]
    fn found_word_shows_everything() {
        let mut app = app();
        app.finish("keyboard".to_owned(), Ok(keyboard()));
        let screen = View::new(&app).to_string();

        assert!(screen.contains("keyboard"));
        assert!(screen.contains("/ˈkiːbɔːd/"));
        assert!(screen.contains("https://ssl.gstatic.com/keyboard.mp3"));
        assert!(screen.contains("noun"));
        assert!(screen.contains("A set of keys used to operate a typewriter"));
        assert!(screen.contains("Keyboarding is the part of this job"));
        assert!(screen.contains("electronic keyboard"));
        assert!(!screen.contains("Antonyms"));
        assert!(screen.contains("https://en.wiktionary.org/wiki/keyboard"));
        assert!(screen.contains("CC BY-SA 3.0"));
        assert!(!screen.contains(NOT_FOUND_TITLE));
    }

    #[test]
    fn unknown_word_shows_not_found() {
        let mut app = app();
        app.lookup = LookupState::NotFound("qwertyuiop".to_owned());
        let screen = View::new(&app).to_string();
        assert!(screen.contains(NOT_FOUND_TITLE));
        assert!(screen.contains("qwertyuiop"));
        assert!(screen.contains("Sorry pal"));
    }

    #[test]
    fn pending_lookup_shows_progress() {
        let mut app = app();
        assert_eq!(app.submit(" keyboard "), Some("keyboard".to_owned()));
        let screen = View::new(&app).styled(false).to_string();
        assert!(screen.contains("Looking up “keyboard”…"));
        assert!(!screen.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn escape_codes_only_when_styled() {
        let mut app = app();
        app.finish("keyboard".to_owned(), Ok(keyboard()));
        app.font.select(FontFamily::Serif);

        let plain = View::new(&app).styled(false).to_string();
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.contains("A set of keys used to operate a typewriter"));

        let styled = View::new(&app).styled(true).to_string();
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn empty_query_shows_validation() {
        let mut app = app();
        app.form.submit("");
        let screen = View::new(&app).to_string();
        assert!(screen.contains(crate::app::EMPTY_QUERY_MESSAGE));
        assert!(screen.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn font_menu_lists_families_when_open() {
        let mut app = app();
        assert!(!View::new(&app).to_string().contains("Mono"));
        app.font.toggle();
        let screen = View::new(&app).to_string();
        for family in FontFamily::ALL {
            assert!(screen.contains(family.label()));
        }
    }

    #[test]
    fn mono_draws_ascii_rules() {
        let mut app = app();
        app.finish("keyboard".to_owned(), Ok(keyboard()));
        app.font.select(FontFamily::Mono);
        let screen = View::new(&app).to_string();
        assert!(screen.contains(&"-".repeat(RULE_WIDTH)));
        assert!(!screen.contains('─'));
    }

    #[test]
    fn themes_differ_only_in_text_and_divider() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_eq!(dark.accent, light.accent);
        assert_ne!(dark.text, light.text);
        assert_ne!(dark.divider, light.divider);
    }
}
