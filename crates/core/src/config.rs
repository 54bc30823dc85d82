//! Immutable game configuration.
//!
//! Built once at startup and handed to [`GameState`](crate::GameState) by value.
//! Nothing mutates it afterwards.

use crate::types::{FALL_INTERVAL_MS, LINE_REWARD, SPAWN_POSITION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Milliseconds between gravity steps.
    pub fall_interval_ms: u32,
    /// Points per cleared row. Multi-row clears earn `rows * line_reward`.
    pub line_reward: u32,
    /// Spawn anchor column.
    pub spawn_x: i8,
    /// Spawn anchor row. Negative values spawn partially above the playfield.
    pub spawn_y: i8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_interval_ms: FALL_INTERVAL_MS,
            line_reward: LINE_REWARD,
            spawn_x: SPAWN_POSITION.0,
            spawn_y: SPAWN_POSITION.1,
        }
    }
}
