//! TUI application state and logic

use crate::core::RejectionReason;
use crate::dictionary::SpellChecker;
use crate::game::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: SpellChecker> {
    pub engine: GameEngine<'a, D>,
    pub input_buffer: String,
    pub alert: Option<RejectionReason>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session totals across resets
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: u32,
}

impl<'a, D: SpellChecker> App<'a, D> {
    #[must_use]
    pub fn new(engine: GameEngine<'a, D>) -> Self {
        Self {
            engine,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word!".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Submit the input buffer as a word
    ///
    /// The buffer is cleared only when the word is accepted, so a rejected word can be fixed.
    pub fn submit_input(&mut self) {
        match self.engine.submit(&self.input_buffer) {
            Ok(Some(accepted)) => {
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(accepted.score);
                self.input_buffer.clear();
                self.add_message(
                    &format!("+{} for '{}'", accepted.points, accepted.word),
                    MessageStyle::Success,
                );
            }
            Ok(None) => {}
            Err(reason) => {
                self.add_message(&reason.title, MessageStyle::Error);
                self.alert = Some(reason);
            }
        }
    }

    /// Start a new round with a fresh root word
    pub fn reset(&mut self) {
        self.engine.start_round();
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!("New root word: {}", self.engine.root_word()),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An open alert swallows everything until it is acknowledged
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: SpellChecker>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: SpellChecker>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        rounds = app.stats.rounds_played,
        words = app.stats.words_found,
        best = app.stats.best_score,
        "session finished"
    );
    Ok(())
}
