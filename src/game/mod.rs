//! The daily game
//!
//! Answer selection, the per-day session state machine, keyboard hints, and
//! the driver that ties them to storage and the dictionary.

mod daily;
mod error;
mod keys;
mod selector;
mod session;

pub use daily::{DailyGame, SubmitOutcome};
pub use error::{ConfigError, MoveError};
pub use keys::KeyStates;
pub use selector::{Selection, UsedWords, pick_today_word};
pub use session::{GameSession, GuessRow, MAX_GUESSES, Phase, REVEAL_DELAY, Resolution};
