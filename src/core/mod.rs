//! Core domain types for Wordle
//!
//! Words and guess scoring. Everything here is pure and has no I/O.

mod score;
mod word;

pub use score::{LetterResult, Score, score};
pub use word::{WORD_LEN, Word, WordError};
