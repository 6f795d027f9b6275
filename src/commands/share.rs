//! Share command
//!
//! Produces the share text for a finished game.

use crate::game::{GameSession, MAX_GUESSES};
use crate::share::share_text;

/// Share text for `session`, available once the game is over
///
/// # Errors
///
/// Returns an error while the game is still being played.
pub fn share_summary(session: &GameSession) -> Result<String, String> {
    if !session.is_game_over() {
        return Err(format!(
            "Today's game is still in progress ({} of {MAX_GUESSES} guesses used)",
            session.guesses_used()
        ));
    }
    Ok(share_text(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DayKey;
    use crate::core::Word;

    #[test]
    fn unfinished_game_cannot_be_shared() {
        let s = GameSession::new(DayKey::new("2025-01-01"), Word::new("ADORE").unwrap());
        assert!(share_summary(&s).is_err());
    }

    #[test]
    fn finished_game_is_shared() {
        let mut s = GameSession::new(DayKey::new("2025-01-01"), Word::new("ADORE").unwrap());
        for ch in "ADORE".chars() {
            s.type_letter(ch).unwrap();
        }
        s.submit_with(|_| true).unwrap();

        assert_eq!(
            share_summary(&s).unwrap(),
            "Wordle 2025-01-01 1/6\n\n💚💚💚💚💚"
        );
    }
}
