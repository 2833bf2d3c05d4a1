use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use ratatui::style::Color;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::quiz::{Difficulty, MAX_SCORE};
use crate::service::generator::QuestionGenerator;
use crate::service::session::{AnswerOutcome, QuizSession};
use crate::ui::views::{eval_color_scale_descending, RenderableView, ViewCommand};
use crate::ui::RenderContext;
use crate::{styled_line, styled_span};

// Pause before the next question appears, long enough to read the feedback
// (and the revealed answer after a miss).
const CORRECT_PAUSE: Duration = Duration::from_secs(1);
const REVEAL_PAUSE: Duration = Duration::from_secs(2);

const MAX_INPUT_LEN: usize = 8;

#[derive(Clone, Copy)]
enum Phase {
    Answering,
    Feedback { advance_at: Instant },
    ConfirmExit,
    Finished,
}

pub struct QuizView {
    session: QuizSession,
    input: String,
    notice: Option<(String, Color)>,
    phase: Phase,
    title: String,
}

impl QuizView {
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let mut generator = match seed {
            Some(seed) => QuestionGenerator::seeded(seed),
            None => QuestionGenerator::new(),
        };
        let questions = generator.generate_round(difficulty);

        Self {
            session: QuizSession::new(difficulty, questions),
            input: String::new(),
            notice: None,
            phase: Phase::Answering,
            title: format!("Maths Quiz - {}", difficulty),
        }
    }

    fn difficulty_color(difficulty: Difficulty) -> Color {
        match difficulty {
            Difficulty::Easy => Color::Green,
            Difficulty::Moderate => Color::Yellow,
            Difficulty::Advanced => Color::Red,
        }
    }

    fn score_scale() -> Vec<(u32, Color)> {
        vec![
            (90, Color::Green),
            (80, Color::Cyan),
            (70, Color::LightMagenta),
            (60, Color::Yellow),
            (0, Color::Red),
        ]
    }

    fn submit_input(&mut self) {
        let Ok(answer) = self.input.trim().parse::<i64>() else {
            self.notice = Some(("Please enter a valid number!".to_string(), Color::Red));
            return;
        };

        match self.session.submit(answer) {
            Some(AnswerOutcome::Correct { attempt, points }) => {
                let color = if attempt == 1 { Color::Green } else { Color::Cyan };
                self.notice = Some((format!("Correct! +{} points", points), color));
                self.phase = Phase::Feedback {
                    advance_at: Instant::now() + CORRECT_PAUSE,
                };
            }
            Some(AnswerOutcome::Retry) => {
                self.notice = Some(("Incorrect! Try again".to_string(), Color::Red));
                self.input.clear();
            }
            Some(AnswerOutcome::Exhausted { correct }) => {
                self.notice = Some((format!("Wrong! Answer was {}", correct), Color::Red));
                self.phase = Phase::Feedback {
                    advance_at: Instant::now() + REVEAL_PAUSE,
                };
            }
            None => {}
        }
    }

    fn question_lines(&self) -> Vec<Line<'static>> {
        let diff_color = Self::difficulty_color(self.session.difficulty());

        let mut lines = vec![
            styled_line!(),
            styled_line!(
                "Question {}/{}  |  Score: {}/{}",
                self.session.question_number(),
                self.session.total_questions(),
                self.session.score(),
                MAX_SCORE;
                Bold Color::White
            ),
            styled_line!(),
        ];

        if let Some(question) = self.session.current() {
            lines.push(styled_line!(
                "Attempt {}: {} = ?",
                self.session.attempt(),
                question;
                Bold diff_color
            ));
        }

        lines.push(styled_line!());
        lines.push(styled_line!(LIST [
            styled_span!("Your Answer: "),
            styled_span!("{}_", self.input; Bold Color::White),
        ]));
        lines.push(styled_line!());

        if let Some((notice, color)) = &self.notice {
            lines.push(styled_line!("{}", notice; Bold *color));
        }

        lines
    }

    fn confirm_lines(&self) -> Vec<Line<'static>> {
        vec![
            styled_line!(),
            styled_line!("Exit Quiz"; Bold Color::Yellow),
            styled_line!(),
            styled_line!("Current Score: {}/{}", self.session.score(), MAX_SCORE),
            styled_line!(),
            styled_line!("Are you sure you want to exit? (y/n)"),
        ]
    }

    fn results_lines(&self) -> Vec<Line<'static>> {
        let score = self.session.score();
        let rank = self.session.rank();
        let rank_color = eval_color_scale_descending(score, &Self::score_scale());

        vec![
            styled_line!(),
            styled_line!("Quiz Completed!"; Bold Color::Green),
            styled_line!(),
            styled_line!("Your Score: {}/{}", score, MAX_SCORE; Bold Color::Cyan),
            styled_line!("Rank: {}", rank; Bold rank_color),
            styled_line!(),
            styled_line!(rank.message()),
            styled_line!(),
            styled_line!("Play Again: (r)    Exit: (q)"; Color::DarkGray),
        ]
    }
}

impl RenderableView for QuizView {
    fn title(&self) -> &str {
        &self.title
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn update(&mut self, keys: &[KeyCode]) -> ViewCommand {
        for &key in keys {
            match self.phase {
                Phase::Answering => match key {
                    KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                        if self.input.len() < MAX_INPUT_LEN {
                            self.input.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        self.input.pop();
                    }
                    KeyCode::Enter => self.submit_input(),
                    KeyCode::Esc => self.phase = Phase::ConfirmExit,
                    _ => {}
                },
                // Input rests while feedback is on screen
                Phase::Feedback { .. } => {}
                Phase::ConfirmExit => match key {
                    KeyCode::Char('y') | KeyCode::Char('Y') => return ViewCommand::Close,
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        self.phase = Phase::Answering;
                    }
                    _ => {}
                },
                Phase::Finished => match key {
                    KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Esc => {
                        return ViewCommand::Close;
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => return ViewCommand::Quit,
                    _ => {}
                },
            }
        }
        ViewCommand::None
    }

    fn tick(&mut self) {
        if let Phase::Feedback { advance_at } = self.phase {
            if Instant::now() >= advance_at {
                self.session.advance();
                self.input.clear();
                self.notice = None;
                self.phase = if self.session.is_finished() {
                    Phase::Finished
                } else {
                    Phase::Answering
                };
            }
        }
    }

    fn render(&self, rc: RenderContext) {
        let lines = match self.phase {
            Phase::Finished => self.results_lines(),
            Phase::ConfirmExit => self.confirm_lines(),
            Phase::Answering | Phase::Feedback { .. } => self.question_lines(),
        };

        let paragraph = Paragraph::new(lines)
            .block(rc.block)
            .wrap(Wrap { trim: false });
        rc.frame.render_widget(paragraph, rc.area);
    }

    fn footer_hint(&self) -> &str {
        match self.phase {
            Phase::Answering => "Type your answer, Enter to submit, Esc to exit the quiz.",
            Phase::Feedback { .. } => "Get ready for the next question...",
            Phase::ConfirmExit => "y to exit, n to keep playing.",
            Phase::Finished => "r to play again, q to exit.",
        }
    }
}
