//! Daily Wordle
//!
//! A personal Wordle with one curated answer per day. The answer rotates
//! through a small word list without repeats, progress survives restarts, and
//! finished games can be shared as a grid of hearts.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_wordle::core::{Score, Word};
//!
//! let guess = Word::new("earth").unwrap();
//! let answer = Word::new("heart").unwrap();
//!
//! let score = Score::calculate(&guess, &answer);
//! println!("{score}"); // 🩷🩷🩷🩷🩷
//! ```

// Core domain types
pub mod core;

// Daily game state machine and driver
pub mod game;

// Word lists
pub mod wordlists;

// Calendar days in a fixed timezone
pub mod clock;

// Persistence
pub mod store;

// Dictionary validity lookup
pub mod lookup;

// Share text and clipboard
pub mod share;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
