//! Today's game, wired to storage and the dictionary
//!
//! `DailyGame` owns the boundary: it loads or creates the session for today,
//! forwards player input to `GameSession`, and writes the whole session back
//! after every accepted transition.

use super::{ConfigError, GameSession, MoveError, Phase, Resolution, UsedWords, pick_today_word};
use crate::clock::Today;
use crate::core::{Score, Word, WordError};
use crate::lookup::{CachedLookup, WordLookup};
use crate::store::Store;
use crate::wordlists::WordList;
use anyhow::{Context, Result};

/// What a submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Scored and waiting for `complete_reveal`
    Scored(Score),
    /// Rejected; the row is unchanged
    Rejected(MoveError),
}

/// A playable game for one day
pub struct DailyGame<S, L> {
    session: GameSession,
    store: S,
    lookup: CachedLookup<L>,
    word_list: WordList,
    message: Option<String>,
}

impl<S, L> DailyGame<S, L> {
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.word_list
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Transient message for the player, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Whether a reveal is waiting to be completed
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.session.phase() == Phase::Revealing
    }
}

impl<S: Store, L: WordLookup> DailyGame<S, L> {
    /// Resume today's session or start a new one
    ///
    /// A stored session for another day is discarded. Starting a new day picks
    /// the answer and records it as used straight away.
    ///
    /// # Errors
    ///
    /// Fails with `ConfigError::EmptyWordList` for an empty list (before any
    /// state is touched) and on storage errors.
    pub fn start(word_list: WordList, mut store: S, lookup: L, today: &Today) -> Result<Self> {
        if word_list.is_empty() {
            return Err(ConfigError::EmptyWordList.into());
        }

        let stored = store
            .load_session()
            .context("Failed to load saved game")?
            .filter(|session| match session.validate() {
                Ok(()) => true,
                Err(reason) => {
                    log::warn!("Discarding inconsistent saved game: {reason}");
                    false
                }
            });
        let session = match stored {
            Some(mut session) if session.day_key() == &today.day_key => {
                log::debug!("Resuming game for {}", today.day_key);
                if session.settle() {
                    store
                        .save_session(&session)
                        .context("Failed to save resumed game")?;
                }
                session
            }
            _ => {
                let answer = Self::choose_answer(&word_list, &mut store, today.day_number)?;
                log::info!("New game for {}", today.day_key);
                let session = GameSession::new(today.day_key.clone(), answer);
                store
                    .save_session(&session)
                    .context("Failed to save new game")?;
                session
            }
        };

        let lookup = CachedLookup::new(lookup, &word_list);
        Ok(Self {
            session,
            store,
            lookup,
            word_list,
            message: None,
        })
    }

    fn choose_answer(word_list: &WordList, store: &mut S, day_number: u64) -> Result<Word> {
        let mut used = store
            .load_used_words()
            .context("Failed to load used words")?;

        let selection = pick_today_word(word_list, &used, day_number)?;
        if selection.cycle_reset {
            log::info!("All {} words used; starting a new cycle", word_list.len());
            store
                .clear_used_words()
                .context("Failed to reset used words")?;
            used = UsedWords::new();
        }

        used.record(selection.word);
        store
            .save_used_words(&used)
            .context("Failed to save used words")?;
        Ok(selection.word)
    }

    fn save(&mut self) -> Result<()> {
        self.store
            .save_session(&self.session)
            .context("Failed to save game")
    }

    /// # Errors
    ///
    /// Only storage errors; rejected input is reported as `Ok(false)`.
    pub fn type_letter(&mut self, ch: char) -> Result<bool> {
        if self.session.type_letter(ch).is_err() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Only storage errors; rejected input is reported as `Ok(false)`.
    pub fn backspace(&mut self) -> Result<bool> {
        if self.session.backspace().is_err() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Validate and score the current row
    ///
    /// The dictionary check happens while the session is `Validating`, so no
    /// other input is accepted in the meantime. On success the session is
    /// left `Revealing`; call [`Self::complete_reveal`] to move on.
    ///
    /// # Errors
    ///
    /// Only storage errors; a rejected guess is `Ok(SubmitOutcome::Rejected)`.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let word = match self.session.begin_submit() {
            Ok(word) => word,
            Err(e) => return Ok(self.reject(e)),
        };

        let valid = self.lookup.is_valid(&word);
        match self.session.finish_submit(valid) {
            Ok(score) => {
                self.message = None;
                self.save()?;
                Ok(SubmitOutcome::Scored(score))
            }
            Err(e) => Ok(self.reject(e)),
        }
    }

    fn reject(&mut self, error: MoveError) -> SubmitOutcome {
        if let Some(text) = error.user_message() {
            self.message = Some(text.to_string());
        }
        SubmitOutcome::Rejected(error)
    }

    /// Finish the reveal of the last scored row
    ///
    /// # Errors
    ///
    /// Storage errors, or `MoveError::NotRevealing` if nothing was scored.
    pub fn complete_reveal(&mut self) -> Result<Resolution> {
        let resolution = self.session.complete_reveal()?;

        match resolution {
            Resolution::Won { guesses } => {
                log::info!("Solved {} in {guesses}", self.session.day_key());
                let mut used = self
                    .store
                    .load_used_words()
                    .context("Failed to load used words")?;
                if used.record(*self.session.answer()) {
                    self.store
                        .save_used_words(&used)
                        .context("Failed to save used words")?;
                }
            }
            Resolution::Lost { answer } => {
                self.message = Some(format!("The word was: {answer}"));
            }
            Resolution::Continue => {}
        }

        self.save()?;
        Ok(resolution)
    }

    /// Submit and, if scored, resolve immediately
    ///
    /// # Errors
    ///
    /// Only storage errors.
    pub fn submit_and_reveal(&mut self) -> Result<Result<Resolution, MoveError>> {
        match self.submit()? {
            SubmitOutcome::Scored(_) => Ok(Ok(self.complete_reveal()?)),
            SubmitOutcome::Rejected(e) => Ok(Err(e)),
        }
    }

    /// Type a whole word then submit and reveal it
    ///
    /// Anything that is not exactly five letters is rejected with the row left
    /// as it was. Otherwise the word replaces any partially typed letters.
    ///
    /// # Errors
    ///
    /// Only storage errors.
    pub fn play_word(&mut self, text: &str) -> Result<Result<Resolution, MoveError>> {
        if let Err(e) = self.session.ensure_accepting_input() {
            return Ok(Err(e));
        }

        let word = match Word::new(text) {
            Ok(word) => word,
            Err(WordError::InvalidLength(_)) => {
                return Ok(Err(self.reject_input(MoveError::WrongLength)));
            }
            Err(WordError::NonAscii | WordError::InvalidCharacters) => {
                return Ok(Err(self.reject_input(MoveError::NotALetter)));
            }
        };

        if let Err(e) = self.session.fill_row(&word) {
            return Ok(Err(e));
        }
        self.save()?;
        self.submit_and_reveal()
    }

    fn reject_input(&mut self, error: MoveError) -> MoveError {
        self.message = error.user_message().map(str::to_string);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::DayKey;
    use crate::lookup::{LookupError, Offline};
    use crate::store::MemoryStore;

    struct Dictionary(&'static [&'static str]);

    impl WordLookup for Dictionary {
        fn check(&self, word: &Word) -> Result<bool, LookupError> {
            Ok(self.0.iter().any(|&known| known == word.text()))
        }
    }

    fn today(key: &str, day_number: u64) -> Today {
        Today {
            day_key: DayKey::new(key),
            day_number,
        }
    }

    fn list() -> WordList {
        WordList::from_strs(["heart", "lover", "kynan"])
    }

    fn start(store: MemoryStore, day: &Today) -> DailyGame<MemoryStore, Dictionary> {
        DailyGame::start(list(), store, Dictionary(&["EARTH", "CRANE"]), day).unwrap()
    }

    #[test]
    fn empty_word_list_prevents_start() {
        let result = DailyGame::start(
            WordList::default(),
            MemoryStore::new(),
            Offline,
            &today("2025-01-01", 0),
        );
        let err = result.err().unwrap();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyWordList)
        );
    }

    #[test]
    fn new_day_picks_and_records_word() {
        let game = start(MemoryStore::new(), &today("2025-01-01", 4));

        // day 4 % 3 = 1 -> LOVER
        assert_eq!(game.session().answer().text(), "LOVER");
        assert!(game.store().used.contains(&Word::new("LOVER").unwrap()));
        assert_eq!(game.store().session.as_ref(), Some(game.session()));
    }

    #[test]
    fn reload_same_day_restores_progress() {
        let day = today("2025-01-01", 0);
        let mut game = start(MemoryStore::new(), &day);
        game.play_word("EARTH").unwrap().unwrap();
        game.type_letter('l').unwrap();

        let store = game.store().clone();
        let resumed = start(store, &day);
        assert_eq!(resumed.session(), game.session());
        assert_eq!(resumed.session().current_row(), 1);
        assert_eq!(resumed.session().current_col(), 1);
        assert_eq!(resumed.store().used.len(), 1);
    }

    #[test]
    fn next_day_starts_fresh_but_keeps_history() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        assert_eq!(game.session().answer().text(), "HEART");
        game.play_word("CRANE").unwrap().unwrap();

        let store = game.store().clone();
        let next = start(store, &today("2025-01-02", 1));

        assert_eq!(next.session().day_key().as_str(), "2025-01-02");
        assert_eq!(next.session().guesses_used(), 0);
        // Pool is LOVER, KYNAN; day 1 -> KYNAN
        assert_eq!(next.session().answer().text(), "KYNAN");
        assert!(next.store().used.contains(&Word::new("HEART").unwrap()));
        assert_eq!(next.store().used.len(), 2);
    }

    #[test]
    fn exhausted_list_resets_history() {
        let mut store = MemoryStore::new();
        store.used = list().iter().copied().collect();

        let game = start(store, &today("2025-01-04", 2));
        assert_eq!(game.session().answer().text(), "KYNAN");
        assert_eq!(game.store().used.len(), 1);
    }

    #[test]
    fn invalid_word_sets_message_and_keeps_row() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        let result = game.play_word("QQQQQ").unwrap();

        assert_eq!(result, Err(MoveError::InvalidWord));
        assert_eq!(game.message(), Some("Not in word list"));
        assert_eq!(game.session().current_col(), 5);
        assert_eq!(game.session().guesses_used(), 0);
    }

    #[test]
    fn incomplete_guess_sets_message() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        game.type_letter('H').unwrap();
        assert_eq!(
            game.submit().unwrap(),
            SubmitOutcome::Rejected(MoveError::IncompleteGuess)
        );
        assert_eq!(game.message(), Some("Not enough letters"));
    }

    #[test]
    fn curated_words_are_always_valid() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        assert_eq!(game.play_word("KYNAN").unwrap(), Ok(Resolution::Continue));
    }

    #[test]
    fn submit_leaves_reveal_pending() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        for ch in "HEART".chars() {
            game.type_letter(ch).unwrap();
        }
        assert_eq!(game.submit().unwrap(), SubmitOutcome::Scored(Score::PERFECT));
        assert!(game.is_revealing());
        assert!(!game.type_letter('A').unwrap());

        assert_eq!(
            game.complete_reveal().unwrap(),
            Resolution::Won { guesses: 1 }
        );
        // Recording the answer again is a no-op
        assert_eq!(game.store().used.len(), 1);
    }

    #[test]
    fn losing_surfaces_answer() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        for _ in 0..5 {
            assert_eq!(game.play_word("CRANE").unwrap(), Ok(Resolution::Continue));
        }
        assert_eq!(
            game.play_word("EARTH").unwrap(),
            Ok(Resolution::Lost {
                answer: Word::new("HEART").unwrap()
            })
        );
        assert_eq!(game.message(), Some("The word was: HEART"));
        assert_eq!(game.play_word("HEART").unwrap(), Err(MoveError::GameOver));
    }
    #[test]
    fn long_input_is_rejected_without_playing() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        game.type_letter('L').unwrap();
        let before = game.session().clone();

        for text in ["hearts", "heartbreak", "hea", ""] {
            assert_eq!(game.play_word(text).unwrap(), Err(MoveError::WrongLength));
            assert_eq!(game.session(), &before);
        }
        assert_eq!(game.message(), Some("Guess must be 5 letters"));
        assert!(!game.session().is_won());
        assert_eq!(game.session().guesses_used(), 0);
    }

    #[test]
    fn non_letters_are_rejected_without_playing() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        assert_eq!(game.play_word("he4rt").unwrap(), Err(MoveError::NotALetter));
        assert_eq!(game.session().current_col(), 0);
        assert_eq!(game.session().guesses_used(), 0);
    }

    #[test]
    fn play_word_during_reveal_is_busy() {
        let mut game = start(MemoryStore::new(), &today("2025-01-01", 0));
        for ch in "CRANE".chars() {
            game.type_letter(ch).unwrap();
        }
        assert!(matches!(game.submit().unwrap(), SubmitOutcome::Scored(_)));

        assert_eq!(game.play_word("HEART").unwrap(), Err(MoveError::Busy));
        assert!(game.is_revealing());
        assert_eq!(game.session().guesses_used(), 1);

        assert_eq!(game.complete_reveal().unwrap(), Resolution::Continue);
        assert_eq!(
            game.play_word("HEART").unwrap(),
            Ok(Resolution::Won { guesses: 2 })
        );
    }

    #[test]
    fn resumed_reveal_is_resolved_and_saved() {
        let day = today("2025-01-01", 0);
        let mut game = start(MemoryStore::new(), &day);
        for ch in "HEART".chars() {
            game.type_letter(ch).unwrap();
        }
        game.submit().unwrap();
        assert_eq!(
            game.store().session.as_ref().map(GameSession::phase),
            Some(Phase::Revealing)
        );

        let resumed = start(game.store().clone(), &day);
        assert!(resumed.session().is_won());
        assert_eq!(
            resumed.store().session.as_ref().map(GameSession::phase),
            Some(Phase::Won)
        );
    }

    #[test]
    fn inconsistent_saved_game_starts_over() {
        let day = today("2025-01-01", 0);
        let mut game = start(MemoryStore::new(), &day);
        game.play_word("EARTH").unwrap().unwrap();

        let mut json = serde_json::to_value(game.session()).unwrap();
        json["current_row"] = serde_json::json!(3);
        let mut store = game.store().clone();
        store.session = Some(serde_json::from_value(json).unwrap());

        let mut resumed = start(store, &day);
        assert_eq!(resumed.session().guesses_used(), 0);
        assert!(resumed.type_letter('A').unwrap());
    }
}
