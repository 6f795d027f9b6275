//! Keyboard hint aggregation
//!
//! Each letter remembers the best result it has earned across all submitted
//! guesses. States only ever move up: `Miss < Present < Correct`.

use crate::core::{LetterResult, Score, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Letter -> best known result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyStates(FxHashMap<char, LetterResult>);

impl KeyStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the aggregate
    ///
    /// A `Correct` letter stays `Correct`; a `Present` letter is not
    /// downgraded by a later `Miss`.
    pub fn merge(&mut self, letter: char, observed: LetterResult) {
        let letter = letter.to_ascii_uppercase();
        match self.0.get(&letter) {
            Some(LetterResult::Correct) => {}
            Some(LetterResult::Present) if observed == LetterResult::Miss => {}
            _ => {
                self.0.insert(letter, observed);
            }
        }
    }

    /// Merge every position of a scored guess
    pub fn merge_score(&mut self, guess: &Word, score: Score) {
        for (&letter, &result) in guess.letters().iter().zip(score.results()) {
            self.merge(char::from(letter), result);
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        self.0.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterResult::{Correct, Miss, Present};

    #[test]
    fn first_observation_is_stored() {
        let mut keys = KeyStates::new();
        keys.merge('h', Miss);
        assert_eq!(keys.get('H'), Some(Miss));
        assert_eq!(keys.get('Z'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keys = KeyStates::new();
        keys.merge('E', Correct);
        keys.merge('E', Present);
        keys.merge('E', Miss);
        assert_eq!(keys.get('E'), Some(Correct));
    }

    #[test]
    fn present_survives_a_miss_but_upgrades_to_correct() {
        let mut keys = KeyStates::new();
        keys.merge('A', Present);
        keys.merge('A', Miss);
        assert_eq!(keys.get('A'), Some(Present));

        keys.merge('A', Correct);
        assert_eq!(keys.get('A'), Some(Correct));
    }

    #[test]
    fn miss_upgrades_to_present() {
        let mut keys = KeyStates::new();
        keys.merge('R', Miss);
        keys.merge('R', Present);
        assert_eq!(keys.get('R'), Some(Present));
    }

    #[test]
    fn merge_score_handles_repeated_letters_in_one_guess() {
        // EERIE vs HEART: E scores miss, correct, ..., miss
        let guess = Word::new("EERIE").unwrap();
        let answer = Word::new("HEART").unwrap();
        let mut keys = KeyStates::new();
        keys.merge_score(&guess, Score::calculate(&guess, &answer));

        assert_eq!(keys.get('E'), Some(Correct));
        assert_eq!(keys.get('R'), Some(Present));
        assert_eq!(keys.get('I'), Some(Miss));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn key_states_round_trip_through_json() {
        let mut keys = KeyStates::new();
        keys.merge('Q', Present);
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"{"Q":"present"}"#);
        let back: KeyStates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, keys);
    }
}
