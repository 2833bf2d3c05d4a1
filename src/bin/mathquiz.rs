use std::io::stdin;
use std::path::{Path, PathBuf};

use brainbreak::model::quiz::Difficulty;
use brainbreak::service::assets;
use brainbreak::styled_line;
use brainbreak::ui::menu::{Menu, MenuEntry};
use brainbreak::ui::repl::{self, Shell};
use brainbreak::ui::views::help::quiz_instructions;
use brainbreak::ui::views::quiz::QuizView;
use clap::Parser;
use ratatui::style::Color;
use ratatui::text::Line;

/// Arithmetic quiz with scored attempts and ranking
#[derive(Parser, Debug)]
#[command(name = "mathquiz")]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed the question generator for a reproducible round
    #[arg(long)]
    seed: Option<u64>,

    /// Folder with optional decorative banner files
    #[arg(long, default_value = assets::DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let shell = Shell {
        title: "Maths Quiz",
        tagline: " Test your arithmetic skills - answer 10 questions and get ranked!",
        accent: Color::LightBlue,
        banner: banner(&args.assets_dir),
        menu: Menu::new(menu_entries(args.seed)),
    };

    if let Err(error) = repl::run(shell) {
        println!("Error occured while running the quiz:\n{}\n", error);

        let mut s = String::new();
        println!("Press Enter to exit");
        let _ = stdin().read_line(&mut s);
    }
}

fn menu_entries(seed: Option<u64>) -> Vec<MenuEntry> {
    vec![
        MenuEntry::group("Choose Your Difficulty Level"),
        MenuEntry::item("1. Easy      (single digit)", move || {
            Box::new(QuizView::new(Difficulty::Easy, seed))
        }),
        MenuEntry::item("2. Moderate  (double digit)", move || {
            Box::new(QuizView::new(Difficulty::Moderate, seed))
        }),
        MenuEntry::item("3. Advanced  (four digit)", move || {
            Box::new(QuizView::new(Difficulty::Advanced, seed))
        }),
        MenuEntry::group("Help"),
        MenuEntry::item("Instructions", || Box::new(quiz_instructions())),
    ]
}

fn banner(assets_dir: &Path) -> Vec<Line<'static>> {
    match assets::load_art(assets_dir, "mathquiz_banner.txt") {
        Some(lines) => lines.into_iter().map(Line::from).collect(),
        None => vec![
            styled_line!("+   -   ×   ÷   =   π   √   ∑   ∞"; Color::LightBlue),
            styled_line!("2+2=4        5×3=15"; Color::DarkGray),
        ],
    }
}
