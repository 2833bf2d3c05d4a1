use std::{
    io::{stdout, Stdout},
    sync::{Arc, Mutex},
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::ui::{
    menu::Menu,
    views::{RenderableView, ViewCommand},
    RenderContext, ReplError,
};

/// Static chrome and menu for one program.
pub struct Shell {
    pub title: &'static str,
    pub tagline: &'static str,
    pub accent: Color,
    pub banner: Vec<Line<'static>>,
    pub menu: Menu,
}

enum AppState {
    Menu,
    ViewingOutput(Box<dyn RenderableView>),
    Error(String),
}

struct App {
    title: &'static str,
    tagline: &'static str,
    accent: Color,
    banner: Vec<Line<'static>>,
    menu: Menu,
    state: AppState,
    should_quit: bool,
    scroll_offset: u16,
    view_height: u16,
    panic_flag: Arc<Mutex<Option<String>>>,
}

impl App {
    fn new(shell: Shell, panic_flag: Arc<Mutex<Option<String>>>) -> Self {
        Self {
            title: shell.title,
            tagline: shell.tagline,
            accent: shell.accent,
            banner: shell.banner,
            menu: shell.menu,
            state: AppState::Menu,
            should_quit: false,
            scroll_offset: 0,
            view_height: 0,
            panic_flag,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), ReplError> {
        loop {
            // Check if a panic occurred and switch to the error screen
            if let Ok(panic_guard) = self.panic_flag.lock() {
                if let Some(panic_msg) = panic_guard.as_ref() {
                    self.state = AppState::Error(panic_msg.clone());
                }
            }

            if let AppState::ViewingOutput(view) = &mut self.state {
                view.tick();
            }

            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    let page = self.view_height / 2;
                    self.handle_key(key.code, page);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.size());
        self.view_height = chunks[1].height;

        // Title with subtle welcome message
        let title = Paragraph::new(self.tagline)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .title(self.title)
                    .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(title, chunks[0]);

        // Footer with context-dependent key hints
        let hint = match &self.state {
            AppState::Menu => "Use ↑/↓ to navigate, Enter to select, q to quit.",
            AppState::ViewingOutput(view) => view.footer_hint(),
            AppState::Error(_) => "Press 'q' to quit.",
        };
        let info = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        frame.render_widget(info, chunks[2]);

        match &self.state {
            AppState::Menu => {
                if self.banner.is_empty() {
                    self.menu.render(frame, chunks[1], self.accent);
                } else {
                    let sub = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([
                            Constraint::Length(self.banner.len() as u16 + 1),
                            Constraint::Min(0),
                        ])
                        .split(chunks[1]);

                    let banner = Paragraph::new(self.banner.clone()).alignment(Alignment::Center);
                    frame.render_widget(banner, sub[0]);
                    self.menu.render(frame, sub[1], self.accent);
                }
            }
            AppState::ViewingOutput(view) => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .title(view.title().to_string())
                    .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(self.accent));

                let rc = RenderContext {
                    frame,
                    area: chunks[1],
                    scroll_offset: self.scroll_offset,
                    block,
                };
                view.render(rc);
            }
            AppState::Error(panic_msg) => {
                let error_block = Block::default()
                    .borders(Borders::ALL)
                    .title("ERROR - Application Panicked")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .padding(Padding::horizontal(1))
                    .border_style(Style::default().fg(Color::Red));

                let error_text = Paragraph::new(panic_msg.as_str())
                    .block(error_block)
                    .wrap(Wrap { trim: false })
                    .scroll((self.scroll_offset, 0))
                    .style(Style::default().fg(Color::Red));

                frame.render_widget(error_text, chunks[1]);
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, page: u16) {
        match &self.state {
            AppState::Menu => self.handle_menu_key(code),
            AppState::ViewingOutput(_) => self.handle_view_key(code, page),
            AppState::Error(_) => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
                KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
                _ => {}
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.menu.previous(),
            KeyCode::Down => self.menu.next(),
            KeyCode::Enter => {
                if let Some(view) = self.menu.build_selected() {
                    self.state = AppState::ViewingOutput(view);
                    self.scroll_offset = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_view_key(&mut self, code: KeyCode, page: u16) {
        let AppState::ViewingOutput(view) = &mut self.state else {
            return;
        };

        // Views like the running quiz own the whole keyboard
        if view.captures_input() {
            let cmd = view.update(&[code]);
            self.apply(cmd);
            return;
        }

        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state = AppState::Menu;
                self.scroll_offset = 0;
            }
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(page),
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(page),
            _ => {
                let cmd = view.update(&[code]);
                self.apply(cmd);
            }
        }
    }

    fn apply(&mut self, cmd: ViewCommand) {
        match cmd {
            ViewCommand::None => {}
            ViewCommand::Close => {
                self.state = AppState::Menu;
                self.scroll_offset = 0;
            }
            ViewCommand::Quit => self.should_quit = true,
        }
    }
}

fn install_panic_hook(panic_flag: Arc<Mutex<Option<String>>>) {
    std::panic::set_hook(Box::new(move |panic_info| {
        let mut msg = String::from("Application panicked!\n\n");

        if let Some(location) = panic_info.location() {
            msg.push_str(&format!(
                "Location: {}:{}:{}\n\n",
                location.file(),
                location.line(),
                location.column()
            ));
        }

        msg.push_str("Message:\n");
        if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            msg.push_str(&format!("  {}\n\n", s));
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            msg.push_str(&format!("  {}\n\n", s));
        } else {
            msg.push_str("  <no message>\n\n");
        }

        let backtrace_enabled = std::env::var("RUST_BACKTRACE")
            .map(|v| v == "1" || v.to_lowercase() == "full")
            .unwrap_or(false);
        if backtrace_enabled {
            msg.push_str(&format!(
                "Backtrace:\n{}\n",
                std::backtrace::Backtrace::force_capture()
            ));
        } else {
            msg.push_str("Backtrace:\n  <disabled - run with RUST_BACKTRACE=1 to enable>\n");
        }

        if let Ok(mut guard) = panic_flag.lock() {
            *guard = Some(msg);
        }
    }));
}

pub fn run(shell: Shell) -> Result<(), ReplError> {
    let panic_flag = Arc::new(Mutex::new(None));
    install_panic_hook(Arc::clone(&panic_flag));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(shell, panic_flag);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}
