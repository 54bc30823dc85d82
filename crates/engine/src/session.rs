//! Session: the per-frame controller.
//!
//! Each frame runs the same sequence:
//! 1. split the input events into game actions, resize and quit signals
//! 2. advance the [`GameState`] (gravity, actions, lock, line clear, score),
//!    stamping the grid view before a pending lock commits
//! 3. render that view through the [`Renderer`]
//! 4. on game over, persist the score if it beats the stored high score
//!
//! [`Session::run`] adds frame pacing on top of [`Session::frame`].

use std::time::{Duration, Instant};

use anyhow::Result;
use arrayvec::ArrayVec;

use blockfall_core::{GameSnapshot, GameState};
use blockfall_store::HighScoreStore;
use blockfall_types::{GameAction, InputEvent};

use crate::config::{SessionConfig, MAX_EVENTS_PER_FRAME};

/// Fixed-capacity event buffer filled once per frame.
pub type EventBuf = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Draws finished frames.
pub trait Renderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Forget what is on screen so the next draw repaints everything.
    fn invalidate(&mut self) {}
}

/// Supplies discrete input events.
pub trait InputSource {
    /// Wait up to `timeout` for the first event, then append every event that
    /// is already queued without blocking again. Stops when `events` is full.
    fn poll_events(&mut self, timeout: Duration, events: &mut EventBuf) -> Result<()>;
}

/// Outcome of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Quit,
    /// `saved` is true when the final score replaced the stored high score.
    GameOver { score: u32, saved: bool },
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit { score: u32 },
    GameOver { score: u32, saved: bool },
}

pub struct Session<R, S> {
    config: SessionConfig,
    game: GameState,
    renderer: R,
    store: S,
    snapshot: GameSnapshot,
    /// Set once the game-over frame has been handled.
    finished: Option<FrameStatus>,
}

impl<R: Renderer, S: HighScoreStore> Session<R, S> {
    /// Start a new game, seeding the high score from `store`.
    pub fn new(config: SessionConfig, seed: u32, renderer: R, store: S) -> Self {
        let high_score = store.load();
        tracing::info!("session start: seed {}, high score {}", seed, high_score);

        Self {
            game: GameState::new(config.game, seed, high_score),
            config,
            renderer,
            store,
            snapshot: GameSnapshot::default(),
            finished: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (GameState, R, S) {
        (self.game, self.renderer, self.store)
    }

    /// Run one frame with `elapsed_ms` since the previous one.
    ///
    /// At most [`MAX_EVENTS_PER_FRAME`] events are looked at. A quit event
    /// ends the session before the game advances and never persists.
    pub fn frame(&mut self, elapsed_ms: u32, events: &[InputEvent]) -> Result<FrameStatus> {
        if let Some(status) = self.finished {
            return Ok(status);
        }

        let mut actions: ArrayVec<GameAction, MAX_EVENTS_PER_FRAME> = ArrayVec::new();
        let mut quit = false;
        for &event in events.iter().take(MAX_EVENTS_PER_FRAME) {
            match event {
                InputEvent::Action(action) => {
                    tracing::debug!("action {}", action.as_str());
                    actions.push(action);
                }
                InputEvent::Resize => self.renderer.invalidate(),
                InputEvent::Quit => quit = true,
            }
        }

        if quit {
            tracing::info!("quit at score {}", self.game.score());
            return Ok(FrameStatus::Quit);
        }

        let report = self
            .game
            .step_into(elapsed_ms, &actions, &mut self.snapshot);
        if report.locked {
            tracing::debug!("piece locked, {} rows cleared", report.lines_cleared);
        }
        if report.new_high_score {
            tracing::info!("new high score {}", self.game.high_score());
        }

        self.renderer.draw(&self.snapshot)?;

        if !report.game_over {
            return Ok(FrameStatus::Running);
        }

        let score = self.game.score();
        let saved = self.persist_high_score(score);
        tracing::info!("game over: score {}, saved {}", score, saved);

        let status = FrameStatus::GameOver { score, saved };
        self.finished = Some(status);
        Ok(status)
    }

    /// Drive frames until the game ends or the player quits.
    pub fn run<I: InputSource>(&mut self, input: &mut I) -> Result<SessionEnd> {
        let frame = Duration::from_millis(self.config.frame_ms as u64);
        let start = Instant::now();
        let mut consumed_ms: u128 = 0;
        let mut last_frame = start;
        let mut events = EventBuf::new();

        loop {
            events.clear();
            let timeout = frame.saturating_sub(last_frame.elapsed());
            input.poll_events(timeout, &mut events)?;

            // Whole milliseconds since start, so sub-millisecond remainders
            // carry over to the next frame instead of being dropped.
            last_frame = Instant::now();
            let total_ms = last_frame.duration_since(start).as_millis();
            let elapsed_ms = u32::try_from(total_ms - consumed_ms).unwrap_or(u32::MAX);
            consumed_ms = total_ms;

            match self.frame(elapsed_ms, &events)? {
                FrameStatus::Running => {}
                FrameStatus::Quit => {
                    return Ok(SessionEnd::Quit {
                        score: self.game.score(),
                    })
                }
                FrameStatus::GameOver { score, saved } => {
                    return Ok(SessionEnd::GameOver { score, saved })
                }
            }
        }
    }

    fn persist_high_score(&mut self, score: u32) -> bool {
        let stored = self.store.load();
        if score <= stored {
            return false;
        }
        match self.store.save(score) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("{:#}", anyhow::Error::new(e));
                false
            }
        }
    }
}
