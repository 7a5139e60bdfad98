//! Piece catalog, translation and rotation tests

use classic_tetris::core::pieces::{blocks_at, rotated_blocks, spawn_blocks};
use classic_tetris::core::{get_shape, ActivePiece, Board};
use classic_tetris::types::{PieceColor, PieceKind, SPAWN_X, SPAWN_Y};

fn piece_at(kind: PieceKind, x: i8, y: i8) -> ActivePiece {
    ActivePiece {
        kind,
        blocks: blocks_at(kind, x, y),
    }
}

#[test]
fn test_catalog_colors() {
    let expected = [
        (PieceKind::I, PieceColor::Cyan),
        (PieceKind::J, PieceColor::Blue),
        (PieceKind::L, PieceColor::Orange),
        (PieceKind::O, PieceColor::Yellow),
        (PieceKind::S, PieceColor::Green),
        (PieceKind::T, PieceColor::Purple),
        (PieceKind::Z, PieceColor::Red),
    ];
    for (kind, color) in expected {
        assert_eq!(kind.color(), color);
    }
}

#[test]
fn test_every_shape_has_four_distinct_blocks() {
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(shape[i], shape[j], "{kind:?}");
            }
        }
    }
}

#[test]
fn test_spawn_fits_inside_visible_field() {
    for kind in PieceKind::ALL {
        for (x, y) in spawn_blocks(kind) {
            assert!((0..10).contains(&x), "{kind:?} x={x}");
            assert!((0..20).contains(&y), "{kind:?} y={y}");
        }
        assert_eq!(spawn_blocks(kind)[0], (SPAWN_X, SPAWN_Y));
    }
}

#[test]
fn test_i_spawn_blocks() {
    assert_eq!(
        spawn_blocks(PieceKind::I),
        [(4, 19), (3, 19), (5, 19), (6, 19)]
    );
}

#[test]
fn test_four_rotations_restore_every_piece() {
    for kind in PieceKind::ALL {
        let start = blocks_at(kind, 4, 10);
        let mut blocks = start;
        for _ in 0..4 {
            blocks = rotated_blocks(&blocks);
        }
        assert_eq!(blocks, start, "{kind:?}");
    }
}

#[test]
fn test_rotation_keeps_pivot() {
    for kind in PieceKind::ALL {
        let blocks = blocks_at(kind, 5, 8);
        assert_eq!(rotated_blocks(&blocks)[0], (5, 8));
    }
}

#[test]
fn test_rotation_rejected_by_occupied_cell() {
    let mut board = Board::new();
    let t = piece_at(PieceKind::T, 4, 10);
    // Rotated T needs (4, 11).
    board.set_cell(4, 11, Some(PieceColor::Red));
    assert!(t.rotation_target(&board).is_none());
}

#[test]
fn test_rotation_may_enter_overflow_rows() {
    let board = Board::new();
    let i = ActivePiece::spawn(PieceKind::I);
    let target = i.rotation_target(&board).expect("vertical I fits");
    assert_eq!(target, [(4, 19), (4, 18), (4, 20), (4, 21)]);
}

#[test]
fn test_rotation_rejected_past_right_wall() {
    let board = Board::new();
    // Vertical I against the right wall rotates back to horizontal through x = 10.
    let vertical = ActivePiece {
        kind: PieceKind::I,
        blocks: [(9, 10), (9, 9), (9, 11), (9, 12)],
    };
    assert!(vertical.rotation_target(&board).is_none());
}

#[test]
fn test_translation_bounds() {
    let board = Board::new();
    let left = piece_at(PieceKind::O, 0, 5);
    assert!(!left.can_translate(&board, -1, 0));
    assert!(left.can_translate(&board, 1, 0));

    let floor = piece_at(PieceKind::O, 4, 1);
    assert!(!floor.can_translate(&board, 0, -1));
}

#[test]
fn test_translation_ignores_own_cells() {
    let mut board = Board::new();
    let piece = piece_at(PieceKind::I, 4, 5);
    for &(x, y) in &piece.blocks {
        board.set_cell(x, y, Some(PieceColor::Cyan));
    }
    assert!(piece.can_translate(&board, 1, 0));
    assert!(piece.can_translate(&board, 0, -1));
}
