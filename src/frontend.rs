//! Terminal frontend: crossterm input and the framebuffer renderer behind the
//! engine's [`InputSource`] and [`Renderer`] traits.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::core::GameSnapshot;
use crate::engine::{EventBuf, InputSource, Renderer};
use crate::input::map_event;
use crate::term::{GameView, TerminalRenderer};

/// Reads key and resize events from the controlling terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_events(&mut self, timeout: Duration, events: &mut EventBuf) -> Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        // Drain whatever is already queued; leftovers wait for the next frame.
        while !events.is_full() {
            if let Some(ev) = map_event(event::read()?) {
                events.push(ev);
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(())
    }
}

/// Full-screen terminal output.
pub struct TerminalScreen {
    term: TerminalRenderer,
}

impl TerminalScreen {
    pub fn new(view: GameView) -> Self {
        Self {
            term: TerminalRenderer::new(view),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.term.enter()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.term.exit()
    }
}

impl Renderer for TerminalScreen {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.term.draw_snapshot(snapshot)
    }

    fn invalidate(&mut self) {
        self.term.invalidate();
    }
}
