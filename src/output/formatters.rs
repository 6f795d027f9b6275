//! Formatting utilities for terminal output

use crate::core::{LetterResult, Score};
use crate::game::GuessRow;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter tile colored by its result
#[must_use]
pub fn tile(letter: char, result: Option<LetterResult>) -> ColoredString {
    let text = format!(" {letter} ");
    match result {
        Some(LetterResult::Correct) => text.black().on_bright_green().bold(),
        Some(LetterResult::Present) => text.black().on_bright_magenta().bold(),
        Some(LetterResult::Miss) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A guess row as colored tiles; unscored rows print plain
#[must_use]
pub fn row_tiles(row: &GuessRow, score: Option<Score>) -> String {
    row.cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let result = score.map(|s| s.results()[i]);
            tile(cell.unwrap_or('_'), result).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pluralise "guess"
#[must_use]
pub const fn guesses_noun(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn row_tiles_marks_empty_cells() {
        colored::control::set_override(false);
        let row = GuessRow::default();
        assert_eq!(row_tiles(&row, None), " _   _   _   _   _ ");
    }

    #[test]
    fn row_tiles_shows_letters() {
        colored::control::set_override(false);
        let row = GuessRow::from_word(&Word::new("HEART").unwrap());
        assert_eq!(
            row_tiles(&row, Some(Score::PERFECT)),
            " H   E   A   R   T "
        );
    }

    #[test]
    fn keyboard_has_every_letter_once() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn plural() {
        assert_eq!(guesses_noun(1), "guess");
        assert_eq!(guesses_noun(4), "guesses");
    }
}
