use blockfall::core::{is_valid, shape, Board, GameConfig, GameState, Piece};
use blockfall::types::{GameAction, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH, LINE_REWARD};
use proptest::prelude::*;

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;
const GRAY: Rgb = Rgb::new(50, 50, 50);

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop::sample::select(vec![
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
        GameAction::HardDrop,
    ])
}

fn board_from(occupied: &[bool]) -> Board {
    let mut board = Board::new();
    for (i, &filled) in occupied.iter().enumerate() {
        if filled {
            board.set((i % W) as i8, (i / W) as i8, Some(GRAY));
        }
    }
    board
}

fn row_bits(board: &Board, y: usize) -> Vec<bool> {
    board.row(y).iter().map(|c| c.is_some()).collect()
}

proptest! {
    #[test]
    fn piece_always_has_four_cells_at_anchor_offsets(
        kind in kind_strategy(),
        turns in -8i8..8,
        x in -4i8..12,
        y in -4i8..22,
    ) {
        let mut piece = Piece::at(kind, x, y);
        piece.rotate(turns);

        let cells = piece.cells();
        prop_assert_eq!(cells.len(), 4);
        let offsets = shape(kind, turns as i32);
        for (cell, (dx, dy)) in cells.iter().zip(offsets) {
            prop_assert_eq!(*cell, (x + dx, y + dy));
        }
    }

    #[test]
    fn is_valid_rejects_out_of_bounds_on_empty_board(
        kind in kind_strategy(),
        turns in 0i8..4,
        x in -5i8..12,
        y in -5i8..22,
    ) {
        let mut piece = Piece::at(kind, x, y);
        piece.rotate(turns);

        let in_bounds = piece
            .cells()
            .iter()
            .all(|&(cx, cy)| (0..BOARD_WIDTH as i8).contains(&cx) && cy < BOARD_HEIGHT as i8);
        prop_assert_eq!(is_valid(&piece, &Board::new()), in_bounds);
    }

    #[test]
    fn cells_above_playfield_ignore_occupancy(
        kind in kind_strategy(),
        turns in 0i8..4,
        x in -3i8..10,
    ) {
        let board = board_from(&[true; W * H]);
        let mut piece = Piece::at(kind, x, -5);
        piece.rotate(turns);

        let within_walls = piece
            .cells()
            .iter()
            .all(|&(cx, _)| (0..BOARD_WIDTH as i8).contains(&cx));
        prop_assert_eq!(is_valid(&piece, &board), within_walls);
    }

    #[test]
    fn clear_lines_removes_exactly_the_full_rows(
        occupied in prop::collection::vec(any::<bool>(), W * H),
        full_rows in prop::collection::vec(0usize..H, 0..5),
    ) {
        let mut occupied = occupied;
        for &y in &full_rows {
            for x in 0..W {
                occupied[y * W + x] = true;
            }
        }
        let mut board = board_from(&occupied);

        let survivors: Vec<Vec<bool>> = (0..H)
            .filter(|&y| !board.is_row_full(y))
            .map(|y| row_bits(&board, y))
            .collect();
        let full = H - survivors.len();
        let before = board.occupied_count();

        prop_assert_eq!(board.clear_lines(), full);
        prop_assert_eq!(before - board.occupied_count(), full * W);

        // Surviving rows keep their order and settle at the bottom.
        for y in 0..H {
            let expected = if y < full {
                vec![false; W]
            } else {
                survivors[y - full].clone()
            };
            prop_assert_eq!(row_bits(&board, y), expected);
        }

        // A second pass finds nothing.
        let settled = board.clone();
        prop_assert_eq!(board.clear_lines(), 0);
        prop_assert_eq!(board, settled);
    }

    #[test]
    fn score_tracks_cleared_lines(
        seed in any::<u32>(),
        frames in prop::collection::vec(
            (0u32..600, prop::collection::vec(action_strategy(), 0..4)),
            1..120,
        ),
    ) {
        let mut game = GameState::new(GameConfig::default(), seed, 0);
        let mut last_score = 0;

        for (elapsed, actions) in frames {
            let report = game.step(elapsed, &actions);

            prop_assert!(game.score() >= last_score);
            prop_assert_eq!(game.score() - last_score, report.lines_cleared * LINE_REWARD);
            prop_assert_eq!(game.score(), game.lines() * LINE_REWARD);
            prop_assert!(game.high_score() >= game.score());
            prop_assert!((0..H).all(|y| !game.board().is_row_full(y)));
            last_score = game.score();

            if report.game_over {
                prop_assert!(game.board().is_topped_out());
                break;
            }
        }
    }
}
