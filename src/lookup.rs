//! Word validity checks
//!
//! Guesses outside the curated list are checked against an online dictionary.
//! If the dictionary cannot be reached the guess is accepted: an outage must
//! never stop anyone from playing.

use crate::core::Word;
use crate::wordlists::WordList;
use rustc_hash::FxHashSet;
use std::fmt;
use std::time::Duration;

/// Free dictionary endpoint; the lowercase word is appended
pub const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Error type for lookups that produced no verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    Unavailable(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Dictionary unavailable: {reason}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Something that can say whether a word is real
pub trait WordLookup {
    /// # Errors
    ///
    /// Returns `LookupError::Unavailable` when no verdict could be obtained.
    fn check(&self, word: &Word) -> Result<bool, LookupError>;
}

/// HTTP dictionary lookup, one attempt per word
pub struct DictionaryApi {
    agent: ureq::Agent,
    base_url: String,
}

impl DictionaryApi {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(DICTIONARY_API, timeout)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, word: &Word) -> String {
        format!("{}{}", self.base_url, word.text().to_ascii_lowercase())
    }
}

impl Default for DictionaryApi {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl WordLookup for DictionaryApi {
    fn check(&self, word: &Word) -> Result<bool, LookupError> {
        match self.agent.get(&self.url_for(word)).call() {
            Ok(_) => Ok(true),
            Err(ureq::Error::Status(code, _)) => {
                log::debug!("Dictionary rejected {word} with status {code}");
                Ok(false)
            }
            Err(ureq::Error::Transport(t)) => Err(LookupError::Unavailable(t.to_string())),
        }
    }
}

/// Lookup that never answers; every word falls through to fail-open
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl WordLookup for Offline {
    fn check(&self, _word: &Word) -> Result<bool, LookupError> {
        Err(LookupError::Unavailable("offline mode".to_string()))
    }
}

impl<L: WordLookup + ?Sized> WordLookup for Box<L> {
    fn check(&self, word: &Word) -> Result<bool, LookupError> {
        (**self).check(word)
    }
}

/// Memoising front for a lookup, with fail-open semantics
///
/// Curated words are valid without asking. Verdicts are cached for the life
/// of the cache; an unavailable dictionary counts as "valid".
pub struct CachedLookup<L> {
    inner: L,
    valid: FxHashSet<Word>,
    invalid: FxHashSet<Word>,
}

impl<L: WordLookup> CachedLookup<L> {
    #[must_use]
    pub fn new(inner: L, curated: &WordList) -> Self {
        Self {
            inner,
            valid: curated.iter().copied().collect(),
            invalid: FxHashSet::default(),
        }
    }

    /// Whether `word` may be played
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    /// use daily_wordle::lookup::{CachedLookup, Offline};
    /// use daily_wordle::wordlists::WordList;
    ///
    /// let mut lookup = CachedLookup::new(Offline, &WordList::default());
    /// // Dictionary unreachable: accepted
    /// assert!(lookup.is_valid(&Word::new("qzxvj").unwrap()));
    /// ```
    pub fn is_valid(&mut self, word: &Word) -> bool {
        if self.valid.contains(word) {
            return true;
        }
        if self.invalid.contains(word) {
            return false;
        }

        match self.inner.check(word) {
            Ok(true) => {
                self.valid.insert(*word);
                true
            }
            Ok(false) => {
                self.invalid.insert(*word);
                false
            }
            Err(e) => {
                log::warn!("{e}; accepting {word}");
                self.valid.insert(*word);
                true
            }
        }
    }

    #[must_use]
    pub const fn inner(&self) -> &L {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Scripted lookup that counts calls
    struct Scripted {
        answer: RefCell<Vec<Result<bool, LookupError>>>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(answers: Vec<Result<bool, LookupError>>) -> Self {
            Self {
                answer: RefCell::new(answers),
                calls: Cell::new(0),
            }
        }
    }

    impl WordLookup for Scripted {
        fn check(&self, _word: &Word) -> Result<bool, LookupError> {
            self.calls.set(self.calls.get() + 1);
            self.answer.borrow_mut().remove(0)
        }
    }

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn curated_words_skip_the_dictionary() {
        let list = WordList::from_strs(["kynan"]);
        let mut lookup = CachedLookup::new(Scripted::new(vec![]), &list);
        assert!(lookup.is_valid(&w("KYNAN")));
        assert_eq!(lookup.inner().calls.get(), 0);
    }

    #[test]
    fn verdicts_are_cached() {
        let scripted = Scripted::new(vec![Ok(true), Ok(false)]);
        let mut lookup = CachedLookup::new(scripted, &WordList::default());

        assert!(lookup.is_valid(&w("CRANE")));
        assert!(!lookup.is_valid(&w("QQQQQ")));
        assert!(lookup.is_valid(&w("CRANE")));
        assert!(!lookup.is_valid(&w("QQQQQ")));
        assert_eq!(lookup.inner().calls.get(), 2);
    }

    #[test]
    fn unavailable_fails_open_without_retry() {
        let scripted = Scripted::new(vec![Err(LookupError::Unavailable("down".into()))]);
        let mut lookup = CachedLookup::new(scripted, &WordList::default());

        assert!(lookup.is_valid(&w("ZZZZZ")));
        assert!(lookup.is_valid(&w("ZZZZZ")));
        assert_eq!(lookup.inner().calls.get(), 1);
    }

    #[test]
    fn offline_is_always_unavailable() {
        assert!(matches!(
            Offline.check(&w("HEART")),
            Err(LookupError::Unavailable(_))
        ));
    }

    #[test]
    fn dictionary_url_is_lowercase() {
        let api = DictionaryApi::with_base_url("http://dict.test/", Duration::from_secs(1));
        assert_eq!(api.url_for(&w("Heart")), "http://dict.test/heart");
    }

    #[test]
    fn unreachable_dictionary_is_unavailable() {
        // Port 9 (discard) on localhost is closed on any sane test machine
        let api = DictionaryApi::with_base_url("http://127.0.0.1:9/", Duration::from_secs(1));
        assert!(matches!(
            api.check(&w("HEART")),
            Err(LookupError::Unavailable(_))
        ));
    }
}
