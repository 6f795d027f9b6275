//! Persistence for the day's session and the used-word history
//!
//! Each record is read and written whole. A session record that cannot be
//! read back, or that does not describe a playable game, is treated as
//! absent: the worst case is a fresh board.

use crate::game::{GameSession, UsedWords};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key of the session record
pub const STATE_KEY: &str = "wordle_game_state";
/// Key of the used-word record
pub const USED_WORDS_KEY: &str = "wordle_used_words";

/// Error type for store access
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O failed: {e}"),
            Self::Json(e) => write!(f, "Storage record is malformed: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Keyed storage for game records
pub trait Store {
    /// The last saved session, whatever day it belongs to
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load_session(&self) -> Result<Option<GameSession>, StoreError>;

    /// Replace the saved session
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save_session(&mut self, session: &GameSession) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load_used_words(&self) -> Result<UsedWords, StoreError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save_used_words(&mut self, used: &UsedWords) -> Result<(), StoreError>;

    /// Forget the used-word history (full cycle reset)
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear_used_words(&mut self) -> Result<(), StoreError>;
}

/// JSON files in a directory, one per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store directory
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

impl Store for FileStore {
    fn load_session(&self) -> Result<Option<GameSession>, StoreError> {
        match self.read::<GameSession>(STATE_KEY) {
            Ok(Some(session)) => match session.validate() {
                Ok(()) => Ok(Some(session)),
                Err(reason) => {
                    log::warn!("Discarding inconsistent saved game: {reason}");
                    Ok(None)
                }
            },
            Err(StoreError::Json(e)) => {
                log::warn!("Discarding unreadable saved game: {e}");
                Ok(None)
            }
            other => other,
        }
    }

    fn save_session(&mut self, session: &GameSession) -> Result<(), StoreError> {
        self.write(STATE_KEY, session)
    }

    fn load_used_words(&self) -> Result<UsedWords, StoreError> {
        match self.read(USED_WORDS_KEY) {
            Ok(used) => Ok(used.unwrap_or_default()),
            Err(StoreError::Json(e)) => {
                log::warn!("Discarding unreadable used-word history: {e}");
                Ok(UsedWords::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save_used_words(&mut self, used: &UsedWords) -> Result<(), StoreError> {
        self.write(USED_WORDS_KEY, used)
    }

    fn clear_used_words(&mut self) -> Result<(), StoreError> {
        self.remove(USED_WORDS_KEY)
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub session: Option<GameSession>,
    pub used: UsedWords,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_session(&self) -> Result<Option<GameSession>, StoreError> {
        Ok(self.session.clone())
    }

    fn save_session(&mut self, session: &GameSession) -> Result<(), StoreError> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn load_used_words(&self) -> Result<UsedWords, StoreError> {
        Ok(self.used.clone())
    }

    fn save_used_words(&mut self, used: &UsedWords) -> Result<(), StoreError> {
        self.used = used.clone();
        Ok(())
    }

    fn clear_used_words(&mut self) -> Result<(), StoreError> {
        self.used.clear();
        Ok(())
    }
}
