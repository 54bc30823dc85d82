//! Board tests - locked grid and line clearing

use blockfall::core::Board;
use blockfall::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn fill_row(board: &mut Board, y: i8, color: Rgb) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(RED)));
    assert_eq!(board.get(5, 10), Some(Some(RED)));
    assert!(board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Some(RED)));
    assert!(!board.set(0, 20, Some(RED)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_full_row_detection() {
    let mut board = Board::new();
    fill_row(&mut board, 19, RED);
    assert!(board.is_row_full(19));

    board.set(9, 19, None);
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(18));
}

#[test]
fn test_single_row_clear_shifts_above_down() {
    let mut board = Board::new();
    fill_row(&mut board, 15, RED);
    // Partial rows above and below the full one.
    board.set(2, 10, Some(BLUE));
    board.set(7, 14, Some(BLUE));
    board.set(0, 19, Some(BLUE));
    board.set(4, 16, Some(BLUE));

    assert_eq!(board.clear_lines(), 1);

    // Cells above the cleared row moved down exactly one row.
    assert_eq!(board.get(2, 11), Some(Some(BLUE)));
    assert_eq!(board.get(2, 10), Some(None));
    assert_eq!(board.get(7, 15), Some(Some(BLUE)));
    assert_eq!(board.get(7, 14), Some(None));
    // Cells below are untouched.
    assert_eq!(board.get(0, 19), Some(Some(BLUE)));
    assert_eq!(board.get(4, 16), Some(Some(BLUE)));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_four_rows_clear_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, RED);
    }
    board.set(3, 15, Some(BLUE));

    let before = board.occupied_count();
    assert_eq!(board.clear_lines(), 4);
    assert_eq!(before - board.occupied_count(), 4 * BOARD_WIDTH as usize);
    assert_eq!(board.get(3, 19), Some(Some(BLUE)));
}

#[test]
fn test_non_adjacent_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, RED);
    fill_row(&mut board, 17, RED);
    board.set(1, 18, Some(BLUE));
    board.set(6, 16, Some(BLUE));

    assert_eq!(board.clear_lines(), 2);
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(1, 19), Some(Some(BLUE)));
    assert_eq!(board.get(6, 18), Some(Some(BLUE)));
}

#[test]
fn test_clear_lines_without_full_rows_is_noop() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(RED));
    }
    board.set(4, 12, Some(BLUE));
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_lock_cells_skips_rows_above_playfield() {
    let mut board = Board::new();
    board.lock_cells(&[(4, -1), (4, 0), (5, -2), (5, 0)], RED);

    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_occupied(4, 0));
    assert!(board.is_occupied(5, 0));
}

#[test]
fn test_topped_out_only_counts_row_zero() {
    let mut board = Board::new();
    board.set(3, 1, Some(RED));
    assert!(!board.is_topped_out());

    board.set(3, 0, Some(RED));
    assert!(board.is_topped_out());
}
