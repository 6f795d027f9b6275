//! Guess scoring and per-letter feedback
//!
//! A guess is scored against the answer letter by letter:
//! - Correct: right letter, right position
//! - Present: letter appears elsewhere in the answer
//! - Miss: letter not in the answer (or all its occurrences already accounted for)

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single letter in a submitted guess
///
/// Ordered by how much it reveals: `Miss < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    Miss,
    Present,
    Correct,
}

impl LetterResult {
    /// Glyph used in shared result text
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '💚',
            Self::Present => '🩷',
            Self::Miss => '🩶',
        }
    }

    /// Parse a share glyph or a single-letter shorthand (`C`/`P`/`M`)
    #[must_use]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '💚' | 'C' | 'c' => Some(Self::Correct),
            '🩷' | 'P' | 'p' => Some(Self::Present),
            '🩶' | 'M' | 'm' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score([LetterResult; WORD_LEN]);

impl Score {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterResult::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LEN]) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Score `guess` against `answer`
    ///
    /// Duplicate letters are never over-counted: each answer position can
    /// justify at most one Correct or Present.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and consume those answer positions
    /// 2. Second pass: left to right over the remaining guess letters, consume the
    ///    lowest-indexed unconsumed answer position with the same letter and mark Present
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{LetterResult, Score, Word};
    ///
    /// let guess = Word::new("earth").unwrap();
    /// let answer = Word::new("heart").unwrap();
    /// let score = Score::calculate(&guess, &answer);
    ///
    /// assert!(score.results().iter().all(|&r| r == LetterResult::Present));
    /// ```
    #[must_use]
    // Allow: Index needed to access guess[i], answer[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut result = [LetterResult::Miss; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // First pass: exact position matches
        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                result[i] = LetterResult::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: first unconsumed occurrence elsewhere
        for i in 0..WORD_LEN {
            if result[i] == LetterResult::Correct {
                continue;
            }
            if let Some(j) = (0..WORD_LEN).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                result[i] = LetterResult::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    #[must_use]
    pub fn count_correct(self) -> usize {
        self.count(LetterResult::Correct)
    }

    #[must_use]
    pub fn count_present(self) -> usize {
        self.count(LetterResult::Present)
    }

    fn count(self, wanted: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == wanted).count()
    }

    /// Render as a row of share glyphs
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Score;
    ///
    /// assert_eq!(Score::PERFECT.to_glyphs(), "💚💚💚💚💚");
    /// ```
    #[must_use]
    pub fn to_glyphs(self) -> String {
        self.0.iter().map(|r| r.glyph()).collect()
    }

    /// Parse a row like "CPMMC" or "💚🩷🩶🩶💚"
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut result = [LetterResult::Miss; WORD_LEN];
        for (slot, ch) in result.iter_mut().zip(chars) {
            *slot = LetterResult::from_glyph(ch)?;
        }
        Some(Self(result))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glyphs())
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid score string: {s}"))
    }
}

/// Score `guess` against `answer`; see [`Score::calculate`]
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Score {
    Score::calculate(guess, answer)
}
