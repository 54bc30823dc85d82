//! Shape catalog and piece tests

use blockfall::core::pieces::color;
use blockfall::core::{rotation_count, rotations, shape, GameConfig, Piece};
use blockfall::types::{PieceKind, Rgb};

#[test]
fn test_every_state_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for state in rotations(kind) {
            for (i, a) in state.iter().enumerate() {
                for b in &state[i + 1..] {
                    assert_ne!(a, b, "{:?} has a duplicate offset", kind);
                }
            }
        }
    }
}

#[test]
fn test_state_counts() {
    let counts: Vec<u8> = PieceKind::ALL.iter().map(|&k| rotation_count(k)).collect();
    assert_eq!(counts, vec![2, 1, 4, 2, 2, 4, 4]);
}

#[test]
fn test_shape_index_wraps_both_ways() {
    for kind in PieceKind::ALL {
        let n = rotation_count(kind) as i32;
        for r in 0..n {
            assert_eq!(shape(kind, r), shape(kind, r + n));
            assert_eq!(shape(kind, r), shape(kind, r - n));
        }
    }
}

#[test]
fn test_colors() {
    assert_eq!(color(PieceKind::I), Rgb::new(0, 255, 255));
    assert_eq!(color(PieceKind::O), Rgb::new(255, 255, 0));
    assert_eq!(color(PieceKind::L), Rgb::new(255, 165, 0));
}

#[test]
fn test_spawn_uses_config_anchor() {
    let config = GameConfig::default();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, &config);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.color(), color(kind));
    }
}

#[test]
fn test_cells_are_anchor_plus_offsets() {
    let mut piece = Piece::at(PieceKind::T, 4, 7);
    assert_eq!(piece.cells(), [(5, 7), (4, 8), (5, 8), (6, 8)]);

    piece.translate(-1, 2);
    assert_eq!(piece.cells(), [(4, 9), (3, 10), (4, 10), (5, 10)]);
}

#[test]
fn test_rotate_full_cycle_returns_to_start() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::at(kind, 3, 3);
        let start = piece.cells();
        for _ in 0..rotation_count(kind) {
            piece.rotate(1);
        }
        assert_eq!(piece.cells(), start);

        piece.rotate(1);
        piece.rotate(-1);
        assert_eq!(piece.cells(), start);
    }
}
