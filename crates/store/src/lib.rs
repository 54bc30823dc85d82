//! High score persistence.
//!
//! The stored format is a plain text file holding one base-10 integer and
//! nothing else. Loading never fails: a missing or unreadable file, or content
//! that is not a non-negative integer, reads as 0.

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write high score to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load/save a single high score value.
pub trait HighScoreStore {
    /// Read the stored high score, or 0 when there is none.
    fn load(&self) -> u32;

    /// Overwrite the stored high score.
    fn save(&self, score: u32) -> Result<(), StoreError>;
}

/// High score kept in a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no high score file at {}", self.path.display());
                return 0;
            }
            Err(e) => {
                tracing::warn!("could not read {}: {}", self.path.display(), e);
                return 0;
            }
        };

        parse_score(&text).unwrap_or_else(|| {
            tracing::warn!(
                "ignoring malformed high score in {}: {:?}",
                self.path.display(),
                text
            );
            0
        })
    }

    fn save(&self, score: u32) -> Result<(), StoreError> {
        fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("saved high score {} to {}", score, self.path.display());
        Ok(())
    }
}

/// In-memory store for headless runs and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<u32>>,
    saves: Cell<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            value: Cell::new(Some(score)),
            saves: Cell::new(0),
        }
    }

    /// The stored value, `None` if nothing was ever stored
    pub fn stored(&self) -> Option<u32> {
        self.value.get()
    }

    /// How many times `save` was called
    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.get().unwrap_or(0)
    }

    fn save(&self, score: u32) -> Result<(), StoreError> {
        self.value.set(Some(score));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

fn parse_score(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join(DEFAULT_HIGH_SCORE_FILE))
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(1200).unwrap();
        assert_eq!(store.load(), 1200);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "1200");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(99999).unwrap();
        store.save(300).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "300");
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for junk in ["abc", "", "12x", "-5", "1.5"] {
            fs::write(store.path(), junk).unwrap();
            assert_eq!(store.load(), 0, "content {:?}", junk);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), " 450\n").unwrap();
        assert_eq!(store.load(), 450);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nope").join("highscore.txt"));
        let err = store.save(10).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), 0);
        assert_eq!(store.stored(), None);
        store.save(40).unwrap();
        assert_eq!(store.load(), 40);
        assert_eq!(store.save_count(), 1);
    }
}
