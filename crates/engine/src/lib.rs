//! Controller loop for a game session.
//!
//! A [`Session`] owns the [`GameState`](blockfall_core::GameState) and drives
//! one frame at a time: collect input, advance the game, render, and persist
//! the high score once the game is over. Rendering and input go through the
//! [`Renderer`] and [`InputSource`] traits so the loop runs headless in tests.

pub mod config;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_store as store;
pub use blockfall_types as types;

pub use config::{SessionConfig, MAX_EVENTS_PER_FRAME};
pub use session::{EventBuf, FrameStatus, InputSource, Renderer, Session, SessionEnd};
