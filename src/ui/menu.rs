use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
    Frame,
};

use crate::ui::views::RenderableView;

pub type ViewFactory = Box<dyn Fn() -> Box<dyn RenderableView>>;

pub struct MenuEntry {
    description: &'static str,
    factory: Option<ViewFactory>,
}

impl MenuEntry {
    /// Non-selectable group header.
    pub fn group(description: &'static str) -> Self {
        Self {
            description,
            factory: None,
        }
    }

    pub fn item<F>(description: &'static str, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RenderableView> + 'static,
    {
        Self {
            description,
            factory: Some(Box::new(factory)),
        }
    }
}

pub struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        let selected = entries
            .iter()
            .position(|e| e.factory.is_some())
            .unwrap_or(0);
        Self { entries, selected }
    }

    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let mut i = self.selected;
        loop {
            i = (i + 1) % len;
            if self.entries[i].factory.is_some() {
                self.selected = i;
                break;
            }
            if i == self.selected {
                break; // no selectable entries
            }
        }
    }

    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len();
        let mut i = self.selected;
        loop {
            i = if i == 0 { len - 1 } else { i - 1 };
            if self.entries[i].factory.is_some() {
                self.selected = i;
                break;
            }
            if i == self.selected {
                break; // no selectable entries
            }
        }
    }

    /// Constructs the view behind the selected entry, if it has one.
    pub fn build_selected(&self) -> Option<Box<dyn RenderableView>> {
        self.entries
            .get(self.selected)
            .and_then(|e| e.factory.as_ref())
            .map(|factory| factory())
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        // Build list items; headers (factory == None) are styled and non-selectable.
        let mut items: Vec<ListItem> = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.factory.is_none() {
                // Group header - accent bold
                items.push(
                    ListItem::new(format!("━━ {} ━━", entry.description))
                        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                );
            } else {
                // Regular menu item - subtle indicator for selected item
                let prefix = if i == self.selected { "  ► " } else { "    " };
                items.push(ListItem::new(format!("{}{}", prefix, entry.description)));
            }
        }

        let mut list_state = ListState::default();
        // Ensure selected points to a selectable entry (it should already), but guard anyway
        let sel = if self
            .entries
            .get(self.selected)
            .map(|e| e.factory.is_some())
            .unwrap_or(false)
        {
            Some(self.selected)
        } else {
            // find first selectable
            self.entries.iter().position(|e| e.factory.is_some())
        };
        list_state.select(sel);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .padding(Padding::uniform(1))
                    .title("Commands (↑/↓ to navigate, Enter to select)")
                    .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("");

        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
