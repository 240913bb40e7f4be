//! TUI application state and logic

use crate::game::{Session, Tick};
use crate::matcher::{Outcome, Validation};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_secs(1);

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    /// Tile indices in the order they were picked
    pub selection: Vec<usize>,
    pub messages: Vec<Message>,
    pub last_result: Option<Validation>,
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
    Warning,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        let mut app = Self {
            session,
            selection: Vec::new(),
            messages: Vec::new(),
            last_result: None,
            should_quit: false,
        };
        app.add_message(
            "Type letters or tile numbers, Enter to slice a word.",
            MessageStyle::Info,
        );
        app
    }

    /// The word spelled by the current selection
    #[must_use]
    pub fn current_word(&self) -> String {
        self.session.round().word_from_indices(&self.selection)
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(&index)
    }

    /// Pick the first unused tile showing `letter`
    pub fn select_letter(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        let index = self
            .session
            .round()
            .letters()
            .iter()
            .enumerate()
            .position(|(i, &tile)| tile == letter && !self.selection.contains(&i));

        match index {
            Some(index) => {
                self.selection.push(index);
                true
            }
            None => false,
        }
    }

    /// Pick a tile by position
    pub fn select_tile(&mut self, index: usize) -> bool {
        if index < self.session.round().letters().len() && !self.is_selected(index) {
            self.selection.push(index);
            true
        } else {
            false
        }
    }

    pub fn unselect_last(&mut self) {
        self.selection.pop();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Submit the selected tiles as a word
    pub fn submit(&mut self) {
        let round_before = self.session.rounds_played();
        let Some(validation) = self.session.submit_indices(&self.selection) else {
            return;
        };
        self.selection.clear();

        let text = match validation.outcome {
            Outcome::Accepted => format!("{} +{}", validation.word, validation.score_delta),
            _ if validation.word.is_empty() => "Pick some letters first.".to_string(),
            outcome => format!("{}: {}", validation.word, outcome.message()),
        };
        let style = match validation.outcome {
            Outcome::Accepted => MessageStyle::Success,
            Outcome::AlreadyFound => MessageStyle::Warning,
            Outcome::TooShort | Outcome::NotAWord => MessageStyle::Error,
        };
        self.add_message(&text, style);

        if validation.round_complete {
            if self.session.is_over() {
                self.add_message(
                    "🎉 Every word found! Press Tab for a new game.",
                    MessageStyle::Success,
                );
            } else if self.session.rounds_played() > round_before {
                let text = format!(
                    "Round {} with {}!",
                    self.session.rounds_played(),
                    self.session.round().base_word()
                );
                self.add_message(&text, MessageStyle::Info);
            }
        }

        self.last_result = Some(validation);
    }

    /// One second of game time
    pub fn tick(&mut self) {
        match self.session.tick() {
            Some(Tick::Warning(seconds)) => {
                self.add_message(&format!("⏰ {seconds} seconds left!"), MessageStyle::Warning);
            }
            Some(Tick::Expired) => {
                self.selection.clear();
                self.add_message(
                    "Time's up! Press Tab for a new game.",
                    MessageStyle::Error,
                );
            }
            Some(Tick::Running(_)) | None => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.restart();
        self.selection.clear();
        self.last_result = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.session.is_over()
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                handle_key(&mut app, key.code, key.modifiers);
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick += TICK_RATE;
        }

        if app.should_quit {
            debug!("leaving TUI with {} points", app.session.total_score());
            break;
        }
    }

    Ok(())
}

fn handle_key<R: Rng>(app: &mut App<R>, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.is_over() {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('n') | KeyCode::Tab | KeyCode::Enter => app.new_game(),
            _ => {
                // Game over: ignore other keys
            }
        }
        return;
    }

    match code {
        KeyCode::Esc => {
            if app.selection.is_empty() {
                app.should_quit = true;
            } else {
                app.clear_selection();
            }
        }
        KeyCode::Tab => app.new_game(),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                app.select_tile(index);
            }
        }
        KeyCode::Char(c) if c.is_alphabetic() => {
            app.select_letter(c);
        }
        KeyCode::Backspace => app.unselect_last(),
        KeyCode::Enter => app.submit(),
        _ => {}
    }
}
