//! One day's game as an explicit state value
//!
//! `GameSession` holds everything needed to resume play: the typed rows, their
//! scores, the cursor and the keyboard hints. Transitions are methods that
//! either apply fully or return a `MoveError` and leave the session untouched.
//!
//! A submission goes through two intermediate phases:
//! 1. `Validating`: the row is frozen while the word is checked
//! 2. `Revealing`: the score is recorded, and input stays blocked until the
//!    presentation layer calls `complete_reveal`

use super::{KeyStates, MoveError};
use crate::clock::DayKey;
use crate::core::{Score, WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of guesses allowed per day
pub const MAX_GUESSES: usize = 6;

/// How long the per-letter reveal takes before the turn resolves
pub const REVEAL_DELAY: Duration = Duration::from_millis(WORD_LEN as u64 * 80 + 100);

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    InProgress,
    Validating,
    Revealing,
    Won,
    Lost,
}

/// How a revealed guess resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Next row is open for typing
    Continue,
    Won { guesses: usize },
    Lost { answer: Word },
}

/// Five cells, each empty or one uppercase letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessRow([Option<char>; WORD_LEN]);

impl GuessRow {
    #[must_use]
    pub const fn cells(&self) -> &[Option<char>; WORD_LEN] {
        &self.0
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.0.iter().take_while(|c| c.is_some()).count()
    }

    /// The typed word, if the row is complete
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(self.0) {
            *slot = u8::try_from(cell?).ok()?;
        }
        Word::from_letters(letters)
    }

    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        Self(word.letters().map(|b| Some(char::from(b))))
    }
}

/// A single day's game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    day_key: DayKey,
    answer: Word,
    rows: Vec<GuessRow>,
    results: Vec<Score>,
    current_row: usize,
    current_col: usize,
    phase: Phase,
    key_states: KeyStates,
}

impl GameSession {
    /// Start a fresh game with one empty row
    #[must_use]
    pub fn new(day_key: DayKey, answer: Word) -> Self {
        Self {
            day_key,
            answer,
            rows: vec![GuessRow::default()],
            results: Vec::new(),
            current_row: 0,
            current_col: 0,
            phase: Phase::InProgress,
            key_states: KeyStates::new(),
        }
    }

    #[must_use]
    pub const fn day_key(&self) -> &DayKey {
        &self.day_key
    }

    /// The day's answer; only show it once the game is over
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn results(&self) -> &[Score] {
        &self.results
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn key_states(&self) -> &KeyStates {
        &self.key_states
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.phase, Phase::Won)
    }

    /// Submitted (scored) guesses so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.results.len()
    }

    /// Whether typing and submitting are currently allowed
    ///
    /// # Errors
    ///
    /// `Busy` while a guess is validating or revealing, `GameOver` once the
    /// game is won or lost.
    pub const fn ensure_accepting_input(&self) -> Result<(), MoveError> {
        match self.phase {
            Phase::InProgress => Ok(()),
            Phase::Validating | Phase::Revealing => Err(MoveError::Busy),
            Phase::Won | Phase::Lost => Err(MoveError::GameOver),
        }
    }

    /// Put a letter in the next free cell
    ///
    /// # Errors
    ///
    /// `NotALetter` for anything but A-Z (either case), `RowFull` once five
    /// letters are typed, plus `Busy`/`GameOver` outside `InProgress`.
    pub fn type_letter(&mut self, ch: char) -> Result<(), MoveError> {
        self.ensure_accepting_input()?;
        if !ch.is_ascii_alphabetic() {
            return Err(MoveError::NotALetter);
        }
        if self.current_col >= WORD_LEN {
            return Err(MoveError::RowFull);
        }

        self.rows[self.current_row].0[self.current_col] = Some(ch.to_ascii_uppercase());
        self.current_col += 1;
        Ok(())
    }

    /// Clear the last typed letter
    ///
    /// # Errors
    ///
    /// `RowEmpty` when nothing has been typed, plus `Busy`/`GameOver`.
    pub fn backspace(&mut self) -> Result<(), MoveError> {
        self.ensure_accepting_input()?;
        if self.current_col == 0 {
            return Err(MoveError::RowEmpty);
        }

        self.current_col -= 1;
        self.rows[self.current_row].0[self.current_col] = None;
        Ok(())
    }

    /// Replace whatever is typed in the current row with `word`
    ///
    /// # Errors
    ///
    /// `Busy`/`GameOver` outside `InProgress`.
    pub fn fill_row(&mut self, word: &Word) -> Result<(), MoveError> {
        self.ensure_accepting_input()?;
        self.rows[self.current_row] = GuessRow::from_word(word);
        self.current_col = WORD_LEN;
        Ok(())
    }

    /// Freeze the current row for validation and return its word
    ///
    /// # Errors
    ///
    /// `IncompleteGuess` if the row has fewer than five letters.
    pub fn begin_submit(&mut self) -> Result<Word, MoveError> {
        self.ensure_accepting_input()?;
        let word = self.rows[self.current_row]
            .word()
            .ok_or(MoveError::IncompleteGuess)?;

        self.phase = Phase::Validating;
        Ok(word)
    }

    /// Drop a pending validation and unfreeze the row
    ///
    /// # Errors
    ///
    /// `NotValidating` if no submission is pending.
    pub fn abandon_submit(&mut self) -> Result<(), MoveError> {
        if self.phase != Phase::Validating {
            return Err(MoveError::NotValidating);
        }
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Apply the validity verdict for the pending row
    ///
    /// A rejected word returns the row to editing untouched. An accepted word
    /// is scored, its result recorded and key hints merged; the session then
    /// waits in `Revealing`.
    ///
    /// # Errors
    ///
    /// `InvalidWord` when `valid` is false, `NotValidating` if nothing is pending.
    pub fn finish_submit(&mut self, valid: bool) -> Result<Score, MoveError> {
        if self.phase != Phase::Validating {
            return Err(MoveError::NotValidating);
        }
        if !valid {
            self.phase = Phase::InProgress;
            return Err(MoveError::InvalidWord);
        }

        let guess = self.rows[self.current_row]
            .word()
            .ok_or(MoveError::IncompleteGuess)?;
        let score = Score::calculate(&guess, &self.answer);

        self.results.push(score);
        self.key_states.merge_score(&guess, score);
        self.phase = Phase::Revealing;
        Ok(score)
    }

    /// Resolve the revealed row: win, loss, or open the next row
    ///
    /// # Errors
    ///
    /// `NotRevealing` unless a scored row is waiting.
    pub fn complete_reveal(&mut self) -> Result<Resolution, MoveError> {
        if self.phase != Phase::Revealing {
            return Err(MoveError::NotRevealing);
        }

        let solved = self
            .results
            .last()
            .is_some_and(|score| score.is_perfect());

        if solved {
            self.phase = Phase::Won;
            return Ok(Resolution::Won {
                guesses: self.results.len(),
            });
        }

        if self.results.len() >= MAX_GUESSES {
            self.phase = Phase::Lost;
            return Ok(Resolution::Lost {
                answer: self.answer,
            });
        }

        self.current_row += 1;
        self.current_col = 0;
        self.rows.push(GuessRow::default());
        self.phase = Phase::InProgress;
        Ok(Resolution::Continue)
    }

    /// Submit, validate with `is_valid`, and resolve in one step
    ///
    /// # Errors
    ///
    /// Same as `begin_submit` and `finish_submit`.
    pub fn submit_with(
        &mut self,
        is_valid: impl FnOnce(&Word) -> bool,
    ) -> Result<Resolution, MoveError> {
        let word = self.begin_submit()?;
        self.finish_submit(is_valid(&word))?;
        self.complete_reveal()
    }

    /// Bring a session loaded mid-submission back to a steady phase
    ///
    /// A pending validation is dropped; a pending reveal is resolved.
    /// Returns whether anything changed.
    pub fn settle(&mut self) -> bool {
        match self.phase {
            Phase::Validating => {
                self.phase = Phase::InProgress;
                true
            }
            Phase::Revealing => match self.complete_reveal() {
                Ok(resolution) => {
                    log::debug!("Resolved interrupted reveal: {resolution:?}");
                    true
                }
                Err(_) => false,
            },
            Phase::InProgress | Phase::Won | Phase::Lost => false,
        }
    }

    /// Check that a session read from storage can be played safely
    ///
    /// Rows, results, cursor and phase must agree with each other, as they
    /// always do for a session built through the transitions above.
    ///
    /// # Errors
    ///
    /// Returns a short description of the first inconsistency found.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.rows.is_empty() || self.rows.len() > MAX_GUESSES {
            return Err("row count out of range");
        }
        if self.current_row != self.rows.len() - 1 {
            return Err("current row is not the last row");
        }
        if self.results.len() > MAX_GUESSES {
            return Err("too many results");
        }

        let row = &self.rows[self.current_row];
        if self.current_col > WORD_LEN
            || row.filled() != self.current_col
            || row.0[self.current_col..].iter().any(Option::is_some)
        {
            return Err("cursor does not match the current row");
        }
        if row.0.iter().flatten().any(|c| !c.is_ascii_uppercase()) {
            return Err("row holds a non-letter");
        }
        if self.rows[..self.results.len().min(self.rows.len())]
            .iter()
            .any(|r| r.word().is_none())
        {
            return Err("scored row is incomplete");
        }

        let scored = self.results.len();
        let consistent = match self.phase {
            Phase::InProgress => scored == self.current_row,
            Phase::Validating => scored == self.current_row && self.current_col == WORD_LEN,
            Phase::Revealing => scored == self.current_row + 1,
            Phase::Won => {
                scored == self.current_row + 1
                    && self.results.last().is_some_and(|score| score.is_perfect())
            }
            Phase::Lost => scored == MAX_GUESSES && scored == self.current_row + 1,
        };
        if consistent {
            Ok(())
        } else {
            Err("phase does not match the recorded guesses")
        }
    }
}
