//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`]s. Each key press
//! is one discrete event; terminal auto-repeat and key releases are ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, map_event, should_quit};
