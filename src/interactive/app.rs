//! TUI application state and logic
//!
//! All key handling goes through [`App::handle_key`], which only touches
//! in-memory state, so the interface can be driven without a terminal.

use crate::core::{Feedback, MAX_TURNS, Tile, WORD_LENGTH, Word};
use crate::solver::entropy::{GuessMetrics, calculate_metrics, rank_guesses};
use crate::solver::{Session, SessionError};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Ranked guesses shown in the side panel
const TOP_GUESSES: usize = 5;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_mode: InputMode,
    /// Word the tiles belong to: the suggestion unless the user typed another
    pub guess: Option<Word>,
    pub metrics: Option<GuessMetrics>,
    /// Tiles being edited for `guess`
    pub tiles: Feedback,
    pub cursor: usize,
    pub manual_word: String,
    /// Best guesses for the current candidates, filled when `show_ranked` is set
    pub ranked: Vec<(String, f64)>,
    pub show_ranked: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Editing the feedback tiles for the current guess
    Tiles,
    /// Typing a word to play instead of the suggestion
    ManualWord,
    /// Session over, waiting for new game or quit
    Finished,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of guesses a win took
    pub guess_distribution: [usize; MAX_TURNS + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, show_ranked: bool) -> Self {
        let mut app = Self {
            session,
            input_mode: InputMode::Tiles,
            guess: None,
            metrics: None,
            tiles: Feedback::ALL_MISS,
            cursor: 0,
            manual_word: String::new(),
            ranked: Vec::new(),
            show_ranked,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        app.session.reset();
        app.refresh_guess();
        app.add_message(
            "Welcome! Set the tiles to the colors the game showed, then press Enter.",
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Tiles => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
                KeyCode::Right => self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1),
                KeyCode::Char(' ') | KeyCode::Up => self.tiles = self.tiles.cycle_at(self.cursor),
                KeyCode::Down => {
                    // two steps forward is one step back
                    self.tiles = self.tiles.cycle_at(self.cursor).cycle_at(self.cursor);
                }
                KeyCode::Char(c @ '1'..='5') => {
                    self.cursor = c as usize - '1' as usize;
                    self.tiles = self.tiles.cycle_at(self.cursor);
                }
                KeyCode::Char(c) => {
                    if let Some(tile) = Tile::from_char(c) {
                        self.set_tile(tile);
                    }
                }
                KeyCode::Backspace => {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Tiles;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => self.use_manual_word(),
                _ => {}
            },
        }
    }

    /// Set the tile under the cursor and move right
    fn set_tile(&mut self, tile: Tile) {
        let mut tiles = *self.tiles.tiles();
        tiles[self.cursor] = tile;
        self.tiles = Feedback::new(tiles);
        self.cursor = (self.cursor + 1).min(WORD_LENGTH - 1);
    }

    /// Point the tiles at the session's suggestion
    fn refresh_guess(&mut self) {
        self.tiles = Feedback::ALL_MISS;
        self.cursor = 0;
        self.guess = self.session.suggestion().cloned();
        self.metrics = self
            .guess
            .as_ref()
            .map(|guess| calculate_metrics(guess, self.session.candidates()));

        self.ranked = if self.show_ranked && self.session.candidates().len() > 1 {
            rank_guesses(
                self.session.lists().allowed_guesses(),
                self.session.candidates(),
                TOP_GUESSES,
                self.session.scan(),
            )
            .into_iter()
            .map(|(word, entropy)| (word.text().to_string(), entropy))
            .collect()
        } else {
            Vec::new()
        };

        self.input_mode = if self.session.is_finished() {
            InputMode::Finished
        } else {
            InputMode::Tiles
        };
    }

    fn submit(&mut self) {
        let Some(guess) = self.guess.clone() else {
            return;
        };
        let feedback = self.tiles;

        match self.session.submit_feedback(guess.clone(), feedback) {
            Ok(result) => {
                self.refresh_guess();
                if result.finished {
                    self.finish_game();
                } else {
                    self.add_message(
                        &format!(
                            "{} {} → {} candidates remaining",
                            guess.text().to_uppercase(),
                            feedback.to_emoji(),
                            result.remaining_candidates
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(SessionError::EmptyCandidateSet { .. }) => self.add_message(
                "Feedback contradicts an earlier guess. Fix the tiles or press 'u' to undo.",
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let guess_count = self.session.history().len();
        self.stats.total_games += 1;

        if self.session.is_solved() {
            self.stats.games_won += 1;
            if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                *slot += 1;
            }

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Out of turns after {guess_count} guesses."),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.manual_word.clear();
        self.messages.clear();
        self.refresh_guess();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        let was_finished = self.session.is_finished();
        let was_solved = self.session.is_solved();
        let guess_count = self.session.history().len();

        match self.session.undo() {
            Ok(_) => {
                // the game is back in play, take it out of the stats again
                if was_finished {
                    self.stats.total_games = self.stats.total_games.saturating_sub(1);
                }
                if was_solved {
                    self.stats.games_won = self.stats.games_won.saturating_sub(1);
                    if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                        *slot = slot.saturating_sub(1);
                    }
                }
                self.refresh_guess();
                self.add_message(
                    &format!("Undone! Back to turn {}", self.session.turn()),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn use_manual_word(&mut self) {
        let word = match Word::new(&self.manual_word) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&format!("Invalid word: {e}"), MessageStyle::Error);
                return;
            }
        };

        if !self.session.lists().is_allowed(&word) {
            self.add_message(
                &format!("Word '{}' not in allowed word list!", word.text().to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        let metrics = calculate_metrics(&word, self.session.candidates());
        if let Some(suggested) = self.metrics.as_ref().map(|m| m.entropy)
            && metrics.entropy < suggested
        {
            self.add_message(
                &format!(
                    "Note: Suggested word had {suggested:.2} bits ({:.2} more)",
                    suggested - metrics.entropy
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (entropy: {:.2} bits, {:.1}x reduction)",
                word.text().to_uppercase(),
                metrics.entropy,
                metrics.entropy.exp2()
            ),
            MessageStyle::Success,
        );

        self.guess = Some(word);
        self.metrics = Some(metrics);
        self.tiles = Feedback::ALL_MISS;
        self.cursor = 0;
        self.input_mode = InputMode::Tiles;
        self.manual_word.clear();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
