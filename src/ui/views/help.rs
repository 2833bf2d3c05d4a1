use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::styled_line;
use crate::ui::views::RenderableView;
use crate::ui::RenderContext;

/// Static text screen, used for instructions and tips.
pub struct TextView {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl TextView {
    pub fn new(title: &'static str, lines: Vec<Line<'static>>) -> Self {
        Self { title, lines }
    }
}

impl RenderableView for TextView {
    fn title(&self) -> &str {
        self.title
    }

    fn render(&self, rc: RenderContext) {
        let paragraph = Paragraph::new(self.lines.clone())
            .block(rc.block)
            .wrap(Wrap { trim: false })
            .scroll((rc.scroll_offset, 0));
        rc.frame.render_widget(paragraph, rc.area);
    }
}

pub fn quiz_instructions() -> TextView {
    TextView::new(
        "Instructions",
        vec![
            styled_line!(),
            styled_line!("HOW TO PLAY"; Bold Color::Cyan),
            styled_line!(),
            styled_line!("1. Choose a difficulty level:"),
            styled_line!("     Easy:     single digit (1-9)"),
            styled_line!("     Moderate: double digit (10-99)"),
            styled_line!("     Advanced: four digit (1000-9999)"),
            styled_line!(),
            styled_line!("2. Answer 10 math questions."),
            styled_line!(),
            styled_line!("3. You get 2 attempts per question:"),
            styled_line!("     1st attempt correct: +10 points"),
            styled_line!("     2nd attempt correct: +5 points"),
            styled_line!("     Both wrong: 0 points"),
            styled_line!(),
            styled_line!("4. Total possible score: 100 points."),
            styled_line!(),
            styled_line!("5. Ranking:"),
            styled_line!("     90-100:   A+ (Outstanding)"),
            styled_line!("     80-89:    A  (Excellent)"),
            styled_line!("     70-79:    B  (Good)"),
            styled_line!("     60-69:    C  (Not Bad)"),
            styled_line!("     Below 60: D  (Keep Practicing)"),
            styled_line!(),
            styled_line!("Good luck!"; Bold Color::Green),
        ],
    )
}

pub fn jokebox_instructions() -> TextView {
    TextView::new(
        "How It Works",
        vec![
            styled_line!(),
            styled_line!("YOUR PERSONAL COMEDY ASSISTANT"; Bold Color::Yellow),
            styled_line!(),
            styled_line!("Open a joke session and then:"),
            styled_line!(),
            styled_line!("  j  -  ask for a joke (the setup appears)"),
            styled_line!("  p  -  reveal the punchline"),
            styled_line!("  n  -  next joke"),
            styled_line!(),
            styled_line!("Each punchline can only be revealed once per joke,"),
            styled_line!("so savor the moment."),
            styled_line!(),
            styled_line!("Jokes live in a plain text file, one per line, with"),
            styled_line!("setup and punchline separated by the first '?'."),
        ],
    )
}
