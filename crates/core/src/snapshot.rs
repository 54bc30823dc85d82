//! Read-only view of a game handed to the renderer each frame.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells with the active piece stamped on top (rows 0..HEIGHT).
    pub grid: Grid,
    pub next: PieceKind,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.next = PieceKind::I;
        self.score = 0;
        self.high_score = 0;
        self.lines = 0;
        self.game_over = false;
    }

    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: PieceKind::I,
            score: 0,
            high_score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
