//! TUI application state and logic

use crate::game::{DailyGame, REVEAL_DELAY, Resolution, SubmitOutcome};
use crate::lookup::WordLookup;
use crate::share::{Clipboard, Osc52Clipboard, copy_or_warn, share_text};
use crate::store::Store;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often to redraw while nothing happens
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S, L> {
    pub game: DailyGame<S, L>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    /// When the current reveal started, if one is running
    pub reveal_started: Option<Instant>,
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

impl<S, L> App<S, L> {
    /// Fraction of the reveal shown so far, for staggering tile colors
    #[must_use]
    pub fn reveal_progress(&self) -> Option<f64> {
        self.reveal_started
            .map(|start| (start.elapsed().as_secs_f64() / REVEAL_DELAY.as_secs_f64()).min(1.0))
    }

    /// Time left before the running reveal resolves
    #[must_use]
    pub fn reveal_remaining(&self) -> Option<Duration> {
        self.reveal_started
            .map(|start| REVEAL_DELAY.saturating_sub(start.elapsed()))
    }
}

impl<S: Store, L: WordLookup> App<S, L> {
    #[must_use]
    pub fn new(game: DailyGame<S, L>) -> Self {
        let mut app = Self {
            game,
            messages: Vec::new(),
            should_quit: false,
            reveal_started: None,
        };

        if app.game.session().is_game_over() {
            app.add_message("Today's game is done. Tab to share.", MessageStyle::Info);
        } else {
            app.add_message("Guess the word in 6 tries.", MessageStyle::Info);
        }
        app
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

    /// # Errors
    ///
    /// Storage errors only.
    pub fn handle_letter(&mut self, ch: char) -> Result<()> {
        if self.game.type_letter(ch)? {
            self.game.clear_message();
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Storage errors only.
    pub fn handle_backspace(&mut self) -> Result<()> {
        self.game.backspace()?;
        Ok(())
    }

    /// Submit the current row; a scored row starts the reveal
    ///
    /// # Errors
    ///
    /// Storage errors only.
    pub fn handle_submit(&mut self) -> Result<()> {
        match self.game.submit()? {
            SubmitOutcome::Scored(_) => {
                self.reveal_started = Some(Instant::now());
            }
            SubmitOutcome::Rejected(e) => {
                if let Some(text) = e.user_message() {
                    self.add_message(text, MessageStyle::Error);
                }
            }
        }
        Ok(())
    }

    /// Resolve the reveal once its delay has passed
    ///
    /// # Errors
    ///
    /// Storage errors only.
    pub fn tick(&mut self) -> Result<()> {
        if self.reveal_remaining().is_some_and(|left| left.is_zero()) {
            self.finish_reveal()?;
        }
        Ok(())
    }

    /// Resolve the pending reveal now
    ///
    /// # Errors
    ///
    /// Storage errors only.
    pub fn finish_reveal(&mut self) -> Result<()> {
        self.reveal_started = None;
        if !self.game.is_revealing() {
            return Ok(());
        }

        match self.game.complete_reveal()? {
            Resolution::Won { guesses } => {
                let celebration = match guesses {
                    1 => "💚 HOLE IN ONE! 💚",
                    2 => "Magnificent!",
                    3 => "Splendid!",
                    4 => "Great!",
                    5 => "Nice!",
                    _ => "Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Tab to share your result.", MessageStyle::Info);
            }
            Resolution::Lost { answer } => {
                self.add_message(&format!("The word was: {answer}"), MessageStyle::Error);
                self.add_message("Tab to share your result.", MessageStyle::Info);
            }
            Resolution::Continue => {}
        }
        Ok(())
    }

    /// Copy the share text; only available once the game is over
    pub fn share(&mut self, clipboard: &mut impl Clipboard) {
        if !self.game.session().is_game_over() {
            self.add_message("Finish today's game first!", MessageStyle::Error);
            return;
        }

        let text = share_text(self.game.session());
        if copy_or_warn(clipboard, &text) {
            self.add_message("Copied to clipboard!", MessageStyle::Success);
        } else {
            self.add_message("Could not copy to clipboard", MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store, L: WordLookup>(app: App<S, L>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, S: Store, L: WordLookup>(
    terminal: &mut Terminal<B>,
    mut app: App<S, L>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = app.reveal_remaining().unwrap_or(IDLE_POLL).min(IDLE_POLL);
        if !event::poll(timeout)? {
            app.tick()?;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.share(&mut Osc52Clipboard);
                }
                // Input during a reveal is dropped
                _ if app.reveal_started.is_some() => {}
                KeyCode::Char(c) => {
                    app.handle_letter(c)?;
                }
                KeyCode::Backspace => {
                    app.handle_backspace()?;
                }
                KeyCode::Enter => {
                    app.handle_submit()?;
                }
                _ => {}
            }
        }

        app.tick()?;

        if app.should_quit {
            break;
        }
    }

    // A reveal interrupted by quitting still counts
    app.finish_reveal()
}
