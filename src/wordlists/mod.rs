//! Curated word lists
//!
//! The daily answer is always drawn from a small personal list. The embedded
//! list is compiled into the binary; a custom list can be loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{MY_WORDS, MY_WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// An ordered, duplicate-free list of valid 5-letter words
///
/// Order is significant: daily selection indexes into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from raw strings
    ///
    /// Entries are normalised (trimmed, uppercased); anything that is not
    /// exactly five ASCII letters is dropped, as are repeats.
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(["heart", "HEART", "nope", "lover"]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_strs<'s>(entries: impl IntoIterator<Item = &'s str>) -> Self {
        let mut seen = FxHashSet::default();
        let words = entries
            .into_iter()
            .filter_map(|s| Word::new(s).ok())
            .filter(|w| seen.insert(*w))
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn my_words_count_matches_const() {
        assert_eq!(MY_WORDS.len(), MY_WORDS_COUNT);
    }

    #[test]
    fn my_words_are_valid_words() {
        for &word in MY_WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not 5 letters");
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(MY_WORDS_COUNT, 17, "Expected 17 curated words");
    }

    #[test]
    fn from_strs_preserves_order_and_filters() {
        let list = WordList::from_strs(["kynan", "gizmo", "gizmo!", "x", "KYNAN", "movie"]);
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, ["KYNAN", "GIZMO", "MOVIE"]);
    }

    #[test]
    fn contains_is_case_insensitive_via_word() {
        let list = WordList::from_strs(["beach"]);
        assert!(list.contains(&Word::new("BEACH").unwrap()));
        assert!(!list.contains(&Word::new("TEXTS").unwrap()));
    }

    #[test]
    fn empty_input_gives_empty_list() {
        let list = WordList::from_strs(std::iter::empty());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
