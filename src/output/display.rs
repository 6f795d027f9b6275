//! Display functions for game state and command results

use super::formatters::{KEYBOARD_ROWS, guesses_noun, row_tiles, tile};
use crate::commands::ScoreResult;
use crate::game::{GameSession, MAX_GUESSES};
use colored::Colorize;

/// Print the board: submitted rows, the row being typed, and blank rows
pub fn print_board(session: &GameSession) {
    println!("\n{}", "─".repeat(40).bright_magenta());
    println!(
        " {} {}",
        "WORDLE".bright_magenta().bold(),
        session.day_key().to_string().bright_black()
    );
    println!("{}", "─".repeat(40).bright_magenta());

    for (i, row) in session.rows().iter().enumerate() {
        let score = session.results().get(i).copied();
        println!("  {}", row_tiles(row, score));
    }
    for _ in session.rows().len()..MAX_GUESSES {
        println!("  {}", row_tiles(&Default::default(), None));
    }

    println!();
    print_keyboard(session);
}

/// Print the keyboard with each letter colored by its best known result
pub fn print_keyboard(session: &GameSession) {
    let keys = session.key_states();
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: Vec<String> = row
            .chars()
            .map(|ch| tile(ch, keys.get(ch)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), line.join(""));
    }
}

/// Print the end-of-game banner
pub fn print_outcome(session: &GameSession) {
    if !session.is_game_over() {
        return;
    }

    println!("\n{}", "═".repeat(40).bright_cyan());
    if session.is_won() {
        let used = session.guesses_used();
        println!(
            "  {} Solved in {} {}",
            "💚".bold(),
            used.to_string().bright_green().bold(),
            guesses_noun(used)
        );
    } else {
        println!(
            "  {} The word was {}",
            "🩶".bold(),
            session.answer().text().bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the result of scoring a guess against an answer
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.text().bright_white().bold(),
        result.answer.text().bright_yellow().bold()
    );
    println!("  {}", result.score.to_glyphs());
    println!(
        "  {} correct, {} present",
        result.score.count_correct().to_string().green(),
        result.score.count_present().to_string().magenta()
    );
}
