use std::io::stdin;
use std::path::{Path, PathBuf};

use brainbreak::service::assets;
use brainbreak::service::jokes::{JokeStore, DEFAULT_JOKES_FILE};
use brainbreak::styled_line;
use brainbreak::ui::menu::{Menu, MenuEntry};
use brainbreak::ui::repl::{self, Shell};
use brainbreak::ui::views::help::jokebox_instructions;
use brainbreak::ui::views::joke::JokeView;
use clap::Parser;
use ratatui::style::Color;
use ratatui::text::Line;

/// Joke assistant that reveals the punchline on demand
#[derive(Parser, Debug)]
#[command(name = "jokebox")]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file with one joke per line, setup and punchline split by '?'
    #[arg(long, default_value = DEFAULT_JOKES_FILE)]
    jokes_file: PathBuf,

    /// Folder with optional decorative banner files
    #[arg(long, default_value = assets::DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let store = match JokeStore::load(&args.jokes_file) {
        Ok(store) => {
            if store.is_empty() {
                log::warn!("{} contains no jokes", args.jokes_file.display());
            }
            store
        }
        Err(error) => {
            log::error!("{} - continuing without jokes", error);
            JokeStore::empty()
        }
    };

    let shell = Shell {
        title: "Alexa Joke Assistant",
        tagline: " Let's laugh together - your personal comedy assistant!",
        accent: Color::Yellow,
        banner: banner(&args.assets_dir),
        menu: Menu::new(menu_entries(store)),
    };

    if let Err(error) = repl::run(shell) {
        println!("Error occured while running the joke assistant:\n{}\n", error);

        let mut s = String::new();
        println!("Press Enter to exit");
        let _ = stdin().read_line(&mut s);
    }
}

fn menu_entries(store: JokeStore) -> Vec<MenuEntry> {
    vec![
        MenuEntry::group("Comedy"),
        MenuEntry::item("Alexa tell me a Joke", move || {
            Box::new(JokeView::new(store.clone()))
        }),
        MenuEntry::group("Help"),
        MenuEntry::item("How it works", || Box::new(jokebox_instructions())),
    ]
}

fn banner(assets_dir: &Path) -> Vec<Line<'static>> {
    match assets::load_art(assets_dir, "jokebox_banner.txt") {
        Some(lines) => lines.into_iter().map(Line::from).collect(),
        None => vec![
            styled_line!("Let's Laugh Together!"; Color::Yellow),
            styled_line!("Get ready for some hilarious jokes..."; Color::DarkGray),
        ],
    }
}
