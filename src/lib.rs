//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `blockfall::{core,engine,input,store,term,types}` and adds the crossterm
//! [`frontend`] that plugs a real terminal into the engine, plus the
//! [`guard`] used by the binary to turn a loop panic into a reported error.

pub mod frontend;
pub mod guard;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
