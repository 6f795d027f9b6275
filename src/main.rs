//! Daily Wordle - CLI
//!
//! One personal Wordle per day, in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use daily_wordle::{
    clock::{Calendar, DEFAULT_TIMEZONE, SystemClock, Today},
    commands::{run_simple, score_words, share_summary},
    game::DailyGame,
    lookup::{DictionaryApi, Offline, WordLookup},
    output::{print_board, print_outcome, print_score_result},
    share::{Osc52Clipboard, copy_or_warn},
    store::{FileStore, MemoryStore, Store},
    wordlists::{
        WordList,
        loader::{embedded, load_from_file},
    },
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "A personal Wordle: one curated word per day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games (default: ~/.daily_wordle)
    #[arg(short, long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Timezone that decides when the daily word changes
    #[arg(short, long, global = true, default_value_t = DEFAULT_TIMEZONE)]
    timezone: Tz,

    /// Custom word list file (one word per line); default is the built-in list
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Skip the online dictionary (every guess is accepted)
    #[arg(long, global = true)]
    offline: bool,

    /// Keep nothing on disk
    #[arg(long, global = true)]
    memory: bool,

    /// Dictionary request timeout in seconds
    #[arg(long, global = true, default_value = "5")]
    lookup_timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode: one guess per line
    Simple,

    /// Show today's board without playing
    Status,

    /// Print (and copy) today's result once the game is over
    Share,

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    // Scoring needs no word list, store or dictionary
    if let Commands::Score { guess, answer } = command {
        return run_score_command(guess, answer);
    }

    let word_list = load_word_list(cli.words.as_deref())?;
    let today = Calendar::new(cli.timezone).today_from(&SystemClock);
    log::debug!(
        "Today is {} (day {}) in {}",
        today.day_key,
        today.day_number,
        cli.timezone
    );

    let lookup: Box<dyn WordLookup> = if cli.offline {
        Box::new(Offline)
    } else {
        Box::new(DictionaryApi::new(Duration::from_secs(cli.lookup_timeout)))
    };

    if cli.memory {
        run_command(command, word_list, MemoryStore::new(), lookup, &today)
    } else {
        let dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
        let store = FileStore::open(&dir)
            .with_context(|| format!("Cannot open data directory {}", dir.display()))?;
        run_command(command, word_list, store, lookup, &today)
    }
}

/// Load the word list from the -w flag, or the embedded list
fn load_word_list(path: Option<&std::path::Path>) -> Result<WordList> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Cannot read word list {}", path.display())),
        None => Ok(embedded()),
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".daily_wordle")
}

fn run_command<S: Store>(
    command: &Commands,
    word_list: WordList,
    store: S,
    lookup: Box<dyn WordLookup>,
    today: &Today,
) -> Result<()> {
    let mut game = DailyGame::start(word_list, store, lookup, today)?;

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&mut game),
        Commands::Status => {
            print_board(game.session());
            print_outcome(game.session());
            Ok(())
        }
        Commands::Share => {
            let text = share_summary(game.session()).map_err(|e| anyhow::anyhow!(e))?;
            println!("{text}");
            copy_or_warn(&mut Osc52Clipboard, &text);
            Ok(())
        }
        Commands::Score { guess, answer } => run_score_command(guess, answer),
    }
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let result = score_words(guess, answer).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_play_command<S: Store>(game: DailyGame<S, Box<dyn WordLookup>>) -> Result<()> {
    use daily_wordle::interactive::{App, run_tui};

    run_tui(App::new(game))
}

