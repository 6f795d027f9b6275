//! Daily answer selection
//!
//! Cycles through the curated list one word per day, never repeating a word
//! until every word has been used once.

use super::ConfigError;
use crate::core::Word;
use crate::wordlists::WordList;
use serde::{Deserialize, Serialize};

/// Words already assigned as a daily answer, in assignment order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedWords(Vec<Word>);

impl UsedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word; returns `false` if it was already recorded
    pub fn record(&mut self, word: Word) -> bool {
        if self.0.contains(&word) {
            return false;
        }
        self.0.push(word);
        true
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.contains(word)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }
}

impl FromIterator<Word> for UsedWords {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut used = Self::new();
        for word in iter {
            used.record(word);
        }
        used
    }
}

/// Outcome of a daily pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub word: Word,
    /// Every word had been used; the caller must clear the stored history
    pub cycle_reset: bool,
}

/// Pick the answer for `day_number`
///
/// The pool is the word list minus `used`, in list order; when that is empty
/// the whole list is the pool again. The answer is `pool[day_number % pool.len()]`.
///
/// # Errors
///
/// Returns `ConfigError::EmptyWordList` if `word_list` is empty.
///
/// # Examples
/// ```
/// use daily_wordle::game::{UsedWords, pick_today_word};
/// use daily_wordle::wordlists::WordList;
///
/// let list = WordList::from_strs(["heart", "lover", "pizza"]);
/// let pick = pick_today_word(&list, &UsedWords::new(), 4).unwrap();
/// assert_eq!(pick.word.text(), "LOVER");
/// assert!(!pick.cycle_reset);
/// ```
pub fn pick_today_word(
    word_list: &WordList,
    used: &UsedWords,
    day_number: u64,
) -> Result<Selection, ConfigError> {
    if word_list.is_empty() {
        return Err(ConfigError::EmptyWordList);
    }

    let mut pool: Vec<&Word> = word_list.iter().filter(|w| !used.contains(w)).collect();
    let cycle_reset = pool.is_empty();
    if cycle_reset {
        pool = word_list.iter().collect();
    }

    let index = (day_number % pool.len() as u64) as usize;
    Ok(Selection {
        word: *pool[index],
        cycle_reset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::embedded;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn pick_indexes_into_unused_pool_in_list_order() {
        let list = WordList::from_strs(["heart", "lover", "kynan", "gizmo"]);
        let used: UsedWords = [w("lover")].into_iter().collect();

        // Pool: HEART, KYNAN, GIZMO
        assert_eq!(pick_today_word(&list, &used, 0).unwrap().word, w("heart"));
        assert_eq!(pick_today_word(&list, &used, 1).unwrap().word, w("kynan"));
        assert_eq!(pick_today_word(&list, &used, 5).unwrap().word, w("gizmo"));
    }

    #[test]
    fn pick_is_deterministic() {
        let list = embedded();
        let used: UsedWords = list.iter().take(5).copied().collect();
        let first = pick_today_word(&list, &used, 1234).unwrap();
        let second = pick_today_word(&list, &used, 1234).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_resets_when_everything_used() {
        let list = WordList::from_strs(["heart", "lover", "kynan"]);
        let used: UsedWords = list.iter().copied().collect();

        let pick = pick_today_word(&list, &used, 7).unwrap();
        assert!(pick.cycle_reset);
        assert_eq!(pick.word, w("lover"));
    }

    #[test]
    fn pick_from_empty_list_is_config_error() {
        let list = WordList::default();
        assert_eq!(
            pick_today_word(&list, &UsedWords::new(), 3),
            Err(ConfigError::EmptyWordList)
        );
    }

    #[test]
    fn full_cycle_uses_every_word_once() {
        let list = embedded();
        let mut used = UsedWords::new();
        let mut picked = Vec::new();

        for day in 600..600 + list.len() as u64 {
            let pick = pick_today_word(&list, &used, day).unwrap();
            assert!(!pick.cycle_reset, "reset before the cycle finished");
            assert!(used.record(pick.word));
            picked.push(pick.word);
        }

        assert_eq!(picked.len(), list.len());
        for word in &list {
            assert_eq!(picked.iter().filter(|p| *p == word).count(), 1);
        }

        let next = pick_today_word(&list, &used, 600 + list.len() as u64).unwrap();
        assert!(next.cycle_reset);
    }

    #[test]
    fn used_words_ignore_entries_outside_the_list() {
        let list = WordList::from_strs(["heart", "lover"]);
        let used: UsedWords = [w("pizza")].into_iter().collect();

        let pick = pick_today_word(&list, &used, 1).unwrap();
        assert!(!pick.cycle_reset);
        assert_eq!(pick.word, w("lover"));
    }

    #[test]
    fn record_is_idempotent() {
        let mut used = UsedWords::new();
        assert!(used.record(w("heart")));
        assert!(!used.record(w("heart")));
        assert_eq!(used.len(), 1);
    }
}
