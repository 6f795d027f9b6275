//! Score command
//!
//! Scores an arbitrary guess against an arbitrary answer.

use crate::core::{Score, Word};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub score: Score,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    Ok(ScoreResult {
        guess,
        answer,
        score: Score::calculate(&guess, &answer),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_valid_words() {
        let result = score_words("earth", "HEART").unwrap();
        assert_eq!(result.guess.text(), "EARTH");
        assert_eq!(result.score.count_present(), 5);
    }

    #[test]
    fn score_invalid_guess() {
        let err = score_words("hea", "heart").err().unwrap();
        assert!(err.starts_with("Invalid guess"));
    }

    #[test]
    fn score_invalid_answer() {
        let err = score_words("heart", "he4rt").err().unwrap();
        assert!(err.starts_with("Invalid answer"));
    }
}
