//! Command implementations

pub mod score;
pub mod share;
pub mod simple;

pub use score::{ScoreResult, score_words};
pub use share::share_summary;
pub use simple::{play_lines, run_simple};
