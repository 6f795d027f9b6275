//! Game error types

use std::fmt;

/// Fatal configuration problems that prevent a game from starting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No valid words survived loading
    EmptyWordList,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => {
                write!(f, "Word list contains no valid 5-letter words")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A rejected input or transition
///
/// Every variant leaves the session exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game is already won or lost
    GameOver,
    /// A submission is being validated or revealed
    Busy,
    /// The current row already has five letters
    RowFull,
    /// Nothing to delete
    RowEmpty,
    NotALetter,
    /// Submitted with fewer than five letters
    IncompleteGuess,
    /// A whole-word guess that is not five letters long
    WrongLength,
    /// Submitted word is not recognised
    InvalidWord,
    NotValidating,
    NotRevealing,
}

impl MoveError {
    /// Message shown to the player, if this error is worth surfacing
    #[must_use]
    pub const fn user_message(self) -> Option<&'static str> {
        match self {
            Self::IncompleteGuess => Some("Not enough letters"),
            Self::WrongLength => Some("Guess must be 5 letters"),
            Self::InvalidWord => Some("Not in word list"),
            _ => None,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Game is over"),
            Self::Busy => write!(f, "Still checking the last guess"),
            Self::RowFull => write!(f, "Row is full"),
            Self::RowEmpty => write!(f, "Row is empty"),
            Self::NotALetter => write!(f, "Only letters A-Z can be entered"),
            Self::IncompleteGuess => write!(f, "Not enough letters"),
            Self::WrongLength => write!(f, "Guess must be 5 letters"),
            Self::InvalidWord => write!(f, "Not in word list"),
            Self::NotValidating => write!(f, "No guess is awaiting validation"),
            Self::NotRevealing => write!(f, "No guess is being revealed"),
        }
    }
}

impl std::error::Error for MoveError {}
