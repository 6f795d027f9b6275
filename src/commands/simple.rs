//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole guess per line.

use crate::game::{DailyGame, MoveError, Resolution};
use crate::lookup::WordLookup;
use crate::output::{print_board, print_outcome};
use crate::share::{Osc52Clipboard, copy_or_warn, share_text};
use crate::store::Store;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure reading input or saving the game.
pub fn run_simple<S: Store, L: WordLookup>(game: &mut DailyGame<S, L>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Daily Wordle - Simple        ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in 6 tries.");
    println!("  💚 right letter, right spot");
    println!("  🩷 right letter, wrong spot");
    println!("  🩶 not in the word\n");
    println!("Commands: 'share' to copy your result, 'quit' to exit\n");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    play_lines(game, &mut input)
}

/// The play loop, reading commands and guesses from `input`
///
/// # Errors
///
/// Returns an error on I/O failure reading input or saving the game.
pub fn play_lines<S: Store, L: WordLookup>(
    game: &mut DailyGame<S, L>,
    input: &mut impl BufRead,
) -> Result<()> {
    print_board(game.session());
    print_outcome(game.session());

    loop {
        let prompt = if game.session().is_game_over() {
            "Command"
        } else {
            "Guess"
        };
        let Some(line) = get_user_input(input, prompt)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            "share" | "s" => {
                if !game.session().is_game_over() {
                    println!("Finish today's game first!\n");
                    continue;
                }
                let text = share_text(game.session());
                println!("\n{text}\n");
                if copy_or_warn(&mut Osc52Clipboard, &text) {
                    println!("{}", "Copied to clipboard!".bright_magenta());
                }
            }
            guess => {
                match game.play_word(guess)? {
                    Ok(Resolution::Continue) => {}
                    Ok(Resolution::Won { .. } | Resolution::Lost { .. }) => {
                        print_board(game.session());
                        print_outcome(game.session());
                        println!("Type 'share' to copy your result.\n");
                        continue;
                    }
                    Err(MoveError::GameOver) => {
                        println!("Today's game is over. Come back tomorrow!\n");
                        continue;
                    }
                    Err(e) => {
                        let text = e.user_message().unwrap_or("Letters A-Z only");
                        println!("❌ {}\n", text.red());
                        continue;
                    }
                }
                print_board(game.session());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{DayKey, Today};
    use crate::lookup::Offline;
    use crate::store::MemoryStore;
    use crate::wordlists::WordList;
    use std::io::Cursor;

    fn game() -> DailyGame<MemoryStore, Offline> {
        let today = Today {
            day_key: DayKey::new("2025-02-14"),
            day_number: 0,
        };
        DailyGame::start(
            WordList::from_strs(["heart", "lover"]),
            MemoryStore::new(),
            Offline,
            &today,
        )
        .unwrap()
    }

    #[test]
    fn lines_drive_the_game_to_a_win() {
        let mut game = game();
        let mut input = Cursor::new("earth\nhea\nheart\nquit\n");
        play_lines(&mut game, &mut input).unwrap();

        assert!(game.session().is_won());
        assert_eq!(game.session().guesses_used(), 2);
    }

    #[test]
    fn overlong_lines_are_not_played() {
        let mut game = game();
        let mut input = Cursor::new("hearts\nheartbreak\nquit\n");
        play_lines(&mut game, &mut input).unwrap();

        assert!(!game.session().is_game_over());
        assert_eq!(game.session().guesses_used(), 0);
        assert_eq!(game.session().current_col(), 0);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let mut game = game();
        let mut input = Cursor::new("lover\n");
        play_lines(&mut game, &mut input).unwrap();

        assert_eq!(game.session().guesses_used(), 1);
        assert!(!game.session().is_game_over());
    }
}
