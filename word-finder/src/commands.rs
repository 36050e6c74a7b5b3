use crate::{
    app::{FontFamily, Theme},
    utilities::str_to_bool,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    ToggleFontMenu,
    SelectFont(FontFamily),
    ToggleTheme,
    SetTheme(bool),
    Help,
    Exit,
    Unknown(String),
}

/// Anything that is not a known command is looked up as a word, so the
/// prompt behaves like a search box.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut parts = line.split_ascii_whitespace();
    let Some(command) = parts.next() else {
        return Command::Search(String::new());
    };
    let rest = parts.collect::<Vec<&str>>().join(" ");
    match command {
        "exit" | "quit" | "q" if rest.is_empty() => Command::Exit,
        "help" | "?" if rest.is_empty() => Command::Help,
        "define" | "find" | "search" => Command::Search(rest),
        "font" if rest.is_empty() => Command::ToggleFontMenu,
        "font" => match rest.parse::<FontFamily>() {
            Ok(family) => Command::SelectFont(family),
            Err(error) => Command::Unknown(error.to_string()),
        },
        "theme" if rest.is_empty() => Command::ToggleTheme,
        "theme" => match rest.parse::<Theme>() {
            Ok(theme) => Command::SetTheme(theme == Theme::Dark),
            Err(error) => match str_to_bool(&rest) {
                Some(dark) => Command::SetTheme(dark),
                None => Command::Unknown(error.to_string()),
            },
        },
        _ => Command::Search(line.to_owned()),
    }
}
