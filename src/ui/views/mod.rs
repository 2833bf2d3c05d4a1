use crossterm::event::KeyCode;

use crate::ui::RenderContext;

pub mod help;
pub mod joke;
pub mod quiz;

pub use help::*;
pub use joke::*;
pub use quiz::*;

/// What a view asks the shell to do after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    None,
    /// Return to the menu.
    Close,
    /// Quit the whole program.
    Quit,
}

/// Trait for rendering views in the TUI
pub trait RenderableView {
    /// Render the view into a ratatui Frame with scroll support
    fn render(&self, rc: RenderContext);

    fn update(&mut self, _keys: &[KeyCode]) -> ViewCommand {
        ViewCommand::None
    }

    /// Called on every poll cycle, whether or not keys arrived.
    fn tick(&mut self) {}

    fn title(&self) -> &str;

    /// Views that capture input receive every key, including Esc and 'q'.
    fn captures_input(&self) -> bool {
        false
    }

    fn footer_hint(&self) -> &str {
        "Use ↑/↓ or PgUp/PgDown to scroll, Esc/q to return."
    }
}

pub fn eval_color_scale_descending<T: PartialOrd>(
    value: T,
    scale: &[(T, ratatui::style::Color)],
) -> ratatui::style::Color {
    for (threshold, color) in scale {
        if value >= *threshold {
            return *color;
        }
    }
    // Default to the last color if no thresholds matched
    scale
        .last()
        .map(|(_, color)| *color)
        .unwrap_or(ratatui::style::Color::White)
}

#[macro_export]
macro_rules! styled_span {
    // More specific patterns FIRST

    // Expression with color and bold (expr; Bold Color::X)
    ($expr:expr; Bold $color:expr) => {
        ratatui::text::Span::styled(
            format!("{}", $expr),
            ratatui::style::Style::default()
                .fg($color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Expression with color (expr; Color::X)
    ($expr:expr; $color:expr) => {
        ratatui::text::Span::styled(
            format!("{}", $expr),
            ratatui::style::Style::default().fg($color)
        )
    };

    // Formatted text with color and bold (text, args...; Bold Color::X)
    ($text:literal, $($arg:expr),+; Bold $color:expr) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default()
                .fg($color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Formatted text with color (text, args...; Color::X)
    ($text:literal, $($arg:expr),+; $color:expr) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default().fg($color)
        )
    };

    // Formatted text (text, args...)
    ($text:literal, $($arg:expr),+) => {
        ratatui::text::Span::raw(format!($text, $($arg),+))
    };

    // Plain text literal (LAST - most general)
    ($text:literal) => {
        ratatui::text::Span::raw($text)
    };

    // Plain expression
    ($expr:expr) => {
        ratatui::text::Span::raw(format!("{}", $expr))
    };
}

#[macro_export]
macro_rules! styled_line {
    // Empty line
    () => {
        ratatui::text::Line::raw("")
    };

    // Span list
    (LIST [$($args:expr),+ $(,)?]) => {
        ratatui::text::Line::from(vec![$($args),+])
    };

    // Full styled line
    ($($args:tt)+) => {
        ratatui::text::Line::from($crate::styled_span!($($args)+))
    };
}
