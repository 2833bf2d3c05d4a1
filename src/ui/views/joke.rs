use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Color;
use ratatui::widgets::{Paragraph, Wrap};

use crate::service::jokes::{JokeSession, JokeStore, RevealError};
use crate::styled_line;
use crate::ui::views::{RenderableView, ViewCommand};
use crate::ui::RenderContext;

pub struct JokeView {
    store: JokeStore,
    session: JokeSession,
    rng: StdRng,
    notice: Option<(String, Color)>,
}

impl JokeView {
    pub fn new(store: JokeStore) -> Self {
        Self {
            store,
            session: JokeSession::new(),
            rng: StdRng::from_entropy(),
            notice: None,
        }
    }

    fn tell_joke(&mut self) {
        self.session.draw(&self.store, &mut self.rng);
        self.notice = None;
    }

    fn reveal_punchline(&mut self) {
        match self.session.reveal() {
            Ok(_) => self.notice = None,
            Err(RevealError::NothingDrawn) => {
                self.notice = Some((
                    "Ask for a joke first - press 'j'!".to_string(),
                    Color::Yellow,
                ));
            }
            Err(RevealError::AlreadyShown) => {
                self.notice = Some(("Punchline is already visible!".to_string(), Color::Yellow));
            }
        }
    }
}

impl RenderableView for JokeView {
    fn title(&self) -> &str {
        "Joke Session"
    }

    fn update(&mut self, keys: &[KeyCode]) -> ViewCommand {
        for &key in keys {
            match key {
                KeyCode::Char('j') | KeyCode::Char('n') | KeyCode::Enter => self.tell_joke(),
                KeyCode::Char('p') => self.reveal_punchline(),
                _ => {}
            }
        }
        ViewCommand::None
    }

    fn render(&self, rc: RenderContext) {
        if self.store.is_empty() {
            rc.error("No jokes available! Check the jokes file.");
            return;
        }

        let mut lines = vec![styled_line!()];

        match self.session.current() {
            Some(joke) => {
                lines.push(styled_line!("{}", joke.setup; Bold Color::LightBlue));
                lines.push(styled_line!());
                if self.session.punchline_shown() {
                    lines.push(styled_line!("{}", joke.punchline; Bold Color::Green));
                } else {
                    lines.push(styled_line!("Press 'p' to show the punchline..."; Color::DarkGray));
                }
            }
            None => {
                lines.push(styled_line!("Press 'j' and I'll tell you a joke!"; Color::DarkGray));
            }
        }

        lines.push(styled_line!());
        if let Some((notice, color)) = &self.notice {
            lines.push(styled_line!("{}", notice; Bold *color));
        }

        let paragraph = Paragraph::new(lines)
            .block(rc.block)
            .wrap(Wrap { trim: false })
            .scroll((rc.scroll_offset, 0));
        rc.frame.render_widget(paragraph, rc.area);
    }

    fn footer_hint(&self) -> &str {
        "j for a joke, p for the punchline, n for the next one, Esc/q to go home."
    }
}
