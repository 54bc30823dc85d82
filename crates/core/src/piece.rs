//! Active falling piece.
//!
//! A `Piece` only knows its kind, anchor and rotation index. It performs no
//! bounds or collision checks: callers mutate it tentatively, ask
//! [`collision::is_valid`](crate::collision::is_valid), and revert on failure.

use crate::config::GameConfig;
use crate::pieces::{self, PieceShape};
use crate::types::{PieceKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Always kept in `0..rotation_count(kind)`.
    rotation: u8,
}

impl Piece {
    /// Create a new piece at the configured spawn anchor, rotation 0
    pub fn spawn(kind: PieceKind, config: &GameConfig) -> Self {
        Self::at(kind, config.spawn_x, config.spawn_y)
    }

    /// Create a piece at an explicit anchor, rotation 0
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0,
        }
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn color(&self) -> Rgb {
        pieces::color(self.kind)
    }

    /// Offsets of the current rotation state
    pub fn shape(&self) -> PieceShape {
        pieces::shape(self.kind, self.rotation as i32)
    }

    /// Absolute board coordinates of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Step the rotation index by `delta` states, wrapping around.
    pub fn rotate(&mut self, delta: i8) {
        let count = pieces::rotation_count(self.kind) as i16;
        self.rotation = (self.rotation as i16 + delta as i16).rem_euclid(count) as u8;
    }
}
