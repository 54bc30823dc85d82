//! Game state module - owns and advances the authoritative game
//!
//! This module ties together the board, the active and next pieces, the piece
//! source and scoring. One call to [`GameState::step`] is one frame of the
//! game: gravity, then the frame's player actions, then the lock (if one is
//! pending), then the top-out check.
//!
//! Every movement uses the same pattern: mutate the piece, ask
//! [`collision::is_valid`], and undo the mutation if the answer is no.

use crate::collision::is_valid;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use crate::Board;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A piece is active and descending
    Falling,
    /// The active piece could not fall (or was hard-dropped) and commits at the end of this step
    Locking,
    /// A locked cell reached the top row. Terminal.
    GameOver,
}

/// What happened during one [`GameState::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Gravity moved the active piece down one row
    pub fell: bool,
    /// The active piece was committed to the board
    pub locked: bool,
    pub lines_cleared: u32,
    /// The score passed the previous high score during this step
    pub new_high_score: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Piece,
    next: Piece,
    source: PieceSource,
    fall_timer_ms: u32,
    phase: Phase,
    score: u32,
    high_score: u32,
    lines: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and previously stored high score
    pub fn new(config: GameConfig, seed: u32, high_score: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let active = Piece::spawn(source.draw(), &config);
        let next = Piece::spawn(source.draw(), &config);

        Self {
            config,
            board: Board::new(),
            active,
            next,
            source,
            // Start saturated so the first frame applies gravity immediately.
            fall_timer_ms: config.fall_interval_ms,
            phase: Phase::Falling,
            score: 0,
            high_score,
            lines: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (tests, benchmarks)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece with a fresh spawn of `kind`
    pub fn replace_active(&mut self, kind: PieceKind) {
        self.active = Piece::spawn(kind, &self.config);
    }

    /// Advance one frame.
    ///
    /// `elapsed_ms` feeds the gravity accumulator; `actions` are applied in
    /// order after gravity. Does nothing once the game is over.
    pub fn step(&mut self, elapsed_ms: u32, actions: &[GameAction]) -> StepReport {
        self.advance(elapsed_ms, actions, None)
    }

    /// Advance one frame and fill `view` with what the player should see.
    ///
    /// The grid is stamped after input and before a pending lock commits, so
    /// the frame in which a piece lands shows it where it landed, with the
    /// rows it completes still present. Score, lines and the game-over flag
    /// reflect the end of the step.
    pub fn step_into(
        &mut self,
        elapsed_ms: u32,
        actions: &[GameAction],
        view: &mut GameSnapshot,
    ) -> StepReport {
        self.advance(elapsed_ms, actions, Some(view))
    }

    fn advance(
        &mut self,
        elapsed_ms: u32,
        actions: &[GameAction],
        mut view: Option<&mut GameSnapshot>,
    ) -> StepReport {
        let mut report = StepReport::default();
        if self.is_game_over() {
            if let Some(view) = view {
                self.snapshot_into(view);
            }
            report.game_over = true;
            return report;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms >= self.config.fall_interval_ms {
            self.fall_timer_ms = 0;
            if self.try_translate(0, 1) {
                report.fell = true;
            } else {
                self.phase = Phase::Locking;
            }
        }

        for &action in actions {
            self.apply_action(action);
        }

        if let Some(view) = view.as_deref_mut() {
            self.stamp_grid(view);
        }

        if self.phase == Phase::Locking {
            let previous_high = self.high_score;
            report.locked = true;
            report.lines_cleared = self.lock_active();
            report.new_high_score = self.high_score > previous_high;
        }

        if self.board.is_topped_out() {
            self.phase = Phase::GameOver;
        }
        report.game_over = self.is_game_over();
        if let Some(view) = view {
            self.write_stats(view);
        }
        report
    }

    /// Apply a single player action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_translate(-1, 0),
            GameAction::MoveRight => self.try_translate(1, 0),
            GameAction::SoftDrop => self.try_translate(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Try to move the active piece
    pub fn try_translate(&mut self, dx: i8, dy: i8) -> bool {
        self.active.translate(dx, dy);
        if is_valid(&self.active, &self.board) {
            return true;
        }
        self.active.translate(-dx, -dy);
        false
    }

    /// Try to advance the active piece one rotation state
    pub fn try_rotate(&mut self) -> bool {
        self.active.rotate(1);
        if is_valid(&self.active, &self.board) {
            return true;
        }
        self.active.rotate(-1);
        false
    }

    /// Drop the active piece as far as it goes and mark it for locking.
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_translate(0, 1) {
            distance += 1;
        }
        self.phase = Phase::Locking;
        distance
    }

    /// Commit the active piece, promote the next piece, clear lines and score.
    ///
    /// Returns the number of rows cleared.
    pub fn lock_active(&mut self) -> u32 {
        let piece = self.active;
        self.board.lock_cells(&piece.cells(), piece.color());

        self.active = self.next;
        self.next = Piece::spawn(self.source.draw(), &self.config);

        let cleared = self.board.clear_lines() as u32;
        self.lines += cleared;
        self.score += cleared * self.config.line_reward;
        if self.score > self.high_score {
            self.high_score = self.score;
        }

        self.phase = Phase::Falling;
        cleared
    }

    /// Write the render view: locked cells plus the active piece.
    ///
    /// The board itself is left untouched.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.stamp_grid(out);
        self.write_stats(out);
    }

    fn stamp_grid(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);

        let color = self.active.color();
        for (x, y) in self.active.cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                out.grid[y as usize][x as usize] = Some(color);
            }
        }
    }

    fn write_stats(&self, out: &mut GameSnapshot) {
        out.next = self.next.kind;
        out.score = self.score;
        out.high_score = self.high_score;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1, 0)
    }
}
