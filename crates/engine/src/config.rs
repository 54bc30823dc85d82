//! Session configuration.

use std::path::PathBuf;

use blockfall_core::GameConfig;
use blockfall_store::DEFAULT_HIGH_SCORE_FILE;
use blockfall_types::FRAME_MS;

/// Upper bound on input events handled in a single frame.
///
/// Events beyond this stay queued for the next frame.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// Target frame interval in milliseconds.
    pub frame_ms: u32,
    pub high_score_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_ms: FRAME_MS,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
        }
    }
}
