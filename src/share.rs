//! Shareable result text
//!
//! ```text
//! Wordle 2025-02-14 3/6
//!
//! 🩶🩷🩶🩶🩶
//! 💚🩷🩶💚🩶
//! 💚💚💚💚💚
//! ```

use crate::game::{GameSession, MAX_GUESSES};
use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::fmt;
use std::io::{self, Write};

/// Render the share summary for a session
///
/// The header shows rows used, or `X` for a game that was not won.
#[must_use]
pub fn share_text(session: &GameSession) -> String {
    let outcome = if session.is_won() {
        session.guesses_used().to_string()
    } else {
        "X".to_string()
    };

    let lines: Vec<String> = session.results().iter().map(|s| s.to_glyphs()).collect();

    format!(
        "Wordle {} {outcome}/{MAX_GUESSES}\n\n{}",
        session.day_key(),
        lines.join("\n")
    )
}

/// Error type for clipboard failures
#[derive(Debug)]
pub struct ClipboardError(io::Error);

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not copy to clipboard: {}", self.0)
    }
}

impl std::error::Error for ClipboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Destination for copied share text
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns `ClipboardError` if the text could not be handed over.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies through the terminal's OSC 52 escape sequence
///
/// Works over SSH and inside most modern terminals; terminals without
/// support silently ignore it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut stdout = io::stdout();
        execute!(stdout, CopyToClipboard::to_clipboard_from(text)).map_err(ClipboardError)?;
        stdout.flush().map_err(ClipboardError)
    }
}

/// Copy `text`, logging instead of failing
///
/// Returns whether the copy went through.
pub fn copy_or_warn(clipboard: &mut impl Clipboard, text: &str) -> bool {
    match clipboard.copy(text) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{e}");
            false
        }
    }
}
