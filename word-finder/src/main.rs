use std::io::{self, Write};

use app::{App, FontFamily, Theme, ThemeSelector};
use clap::Parser;
use commands::{parse_command, Command};
use dictionary::{Dictionary, Url};
use render::View;
use utilities::input;

mod app;
mod commands;
mod logging;
mod render;
mod utilities;

/// Look up English words in the free dictionary API.
#[derive(Parser, Debug)]
#[command(name = "word-finder", version, about)]
struct Cli {
    /// Word to define; starts an interactive session when omitted.
    word: Option<String>,

    /// Font family: sans, serif or mono.
    #[arg(short, long, default_value = "sans")]
    font: FontFamily,

    /// Colour theme: dark or light. Follows the terminal when omitted.
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Entries endpoint of the dictionary API.
    #[arg(long, env = "WORD_FINDER_API_URL")]
    api_url: Option<Url>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short, long)]
    debug: bool,
}

const HELP: &str = "\
<word> | define <word>   look a word up
font                     open or close the font menu
font <sans|serif|mono>   switch font
theme                    toggle dark mode
theme <dark|light>       set the theme
help                     show this message
quit                     leave";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let dict = match cli.api_url {
        Some(url) => Dictionary::with_base_url(url),
        None => Dictionary::new(),
    };
    tracing::debug!(api = %dict.base_url(), "dictionary ready");

    let theme = cli
        .theme
        .map(ThemeSelector::new)
        .unwrap_or_else(ThemeSelector::from_env);
    let mut app = App::new(cli.font, theme);

    if let Some(word) = cli.word {
        if let Some(word) = app.submit(&word) {
            print!("{}", View::new(&app));
            io::stdout().flush()?;
            app.fetch(&dict, word).await;
        }
        print!("{}", View::new(&app));
        return Ok(());
    }

    print!("{}", View::new(&app));
    loop {
        let Some(line) = input(">> ")? else {
            break;
        };
        match parse_command(&line) {
            Command::Exit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Unknown(reason) => {
                println!("{reason}");
                continue;
            }
            Command::Search(word) => {
                if let Some(word) = app.submit(&word) {
                    print!("{}", View::new(&app));
                    io::stdout().flush()?;
                    app.fetch(&dict, word).await;
                }
            }
            Command::ToggleFontMenu => app.font.toggle(),
            Command::SelectFont(family) => {
                tracing::debug!(font = family.css_stack(), "font changed");
                app.font.select(family);
            }
            Command::ToggleTheme => app.theme.toggle(),
            Command::SetTheme(dark) => app.theme.set(dark),
        }
        print!("{}", View::new(&app));
    }
    Ok(())
}
