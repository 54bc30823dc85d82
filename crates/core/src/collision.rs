//! Collision / validity checking.
//!
//! [`is_valid`] is the single predicate every move, rotation and gravity step
//! goes through. Callers apply a tentative mutation, check, and revert.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether a single cell may be occupied by a falling piece.
///
/// Rows above the playfield (y < 0) are never occupied, so only the side
/// walls apply there.
#[inline]
pub fn cell_is_free(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
        return false;
    }
    y < 0 || !board.is_occupied(x, y)
}

/// Check that every cell of `piece` is inside the walls, above the floor, and
/// not overlapping a locked cell.
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    piece
        .cells()
        .iter()
        .all(|&(x, y)| cell_is_free(board, x, y))
}
