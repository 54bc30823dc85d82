//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has **no
//! dependencies** on terminal I/O, persistence, or logging, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`pieces`]: Shape catalog (rotation states and colors per kind)
//! - [`piece`]: The active piece (kind, anchor, rotation index)
//! - [`board`]: 10x20 locked-cell grid and line clearing
//! - [`collision`]: The validity predicate used for every move
//! - [`game_state`]: Frame-by-frame state machine, scoring, high score
//! - [`rng`]: Uniform random piece generation
//! - [`snapshot`]: Read-only render view
//! - [`config`]: Immutable gameplay configuration
//!
//! # Game Rules
//!
//! - **Gravity**: The active piece falls one row every 500ms
//! - **Rotation**: One state clockwise; blocked rotations are simply undone (no wall kicks)
//! - **Hard drop**: Drops to the lowest valid row and locks in the same frame
//! - **Scoring**: 100 points per cleared row, no multi-line bonus
//! - **Game over**: Any locked cell in the top row
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345, 0);
//! game.replace_active(PieceKind::O);
//!
//! let report = game.step(16, &[GameAction::HardDrop]);
//! assert!(report.locked);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::is_valid;
pub use config::GameConfig;
pub use game_state::{GameState, Phase, StepReport};
pub use piece::Piece;
pub use pieces::{rotation_count, rotations, shape, PieceShape};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{GameSnapshot, Grid};
