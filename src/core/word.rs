//! Wordle word representation
//!
//! A Word is exactly five ASCII letters, normalised to uppercase.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter word, stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Contains non-ASCII characters
    /// - Length is not exactly 5
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("heart").unwrap();
    /// assert_eq!(word.text(), "HEART");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("h3art").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            letters: bytes.map(|b| b.to_ascii_uppercase()),
        })
    }

    /// Build a word from already-typed letters
    ///
    /// Returns `None` unless every letter is an ASCII letter.
    #[must_use]
    pub fn from_letters(letters: [u8; WORD_LEN]) -> Option<Self> {
        letters
            .iter()
            .all(u8::is_ascii_alphabetic)
            .then(|| Self {
                letters: letters.map(|b| b.to_ascii_uppercase()),
            })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Letters are validated ASCII at construction
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text().to_string()
    }
}
