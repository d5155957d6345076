//! Piece tests - shape catalog and active piece movement

use blockfall::core::shapes::{get_shape, next_rotation, state_count};
use blockfall::core::{ActivePiece, Grid};
use blockfall::types::{CellPos, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(state_count(PieceKind::I), 2);
    assert_eq!(get_shape(PieceKind::I, 0), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(get_shape(PieceKind::I, 1), [(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    assert_eq!(state_count(PieceKind::O), 1);
    assert_eq!(get_shape(PieceKind::O, 0), [(1, 0), (2, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(state_count(PieceKind::T), 4);
    assert_eq!(get_shape(PieceKind::T, 0), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(get_shape(PieceKind::T, 1), [(1, 0), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(get_shape(PieceKind::T, 2), [(1, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(get_shape(PieceKind::T, 3), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_rotation_order_wraps() {
    for kind in PieceKind::ALL {
        let mut rotation = 0;
        for _ in 0..state_count(kind) {
            rotation = next_rotation(kind, rotation);
        }
        assert_eq!(rotation, 0, "{:?} should return to state 0", kind);
    }
}

// ============== Active Piece Tests ==============

#[test]
fn test_i_spawn_cells() {
    let piece = ActivePiece::spawn(PieceKind::I);
    assert_eq!(
        piece.current_cells(),
        [
            CellPos::new(4, 0),
            CellPos::new(5, 0),
            CellPos::new(6, 0),
            CellPos::new(7, 0),
        ]
    );
}

#[test]
fn test_spawn_valid_on_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        assert!(ActivePiece::spawn(kind).is_valid(&grid));
    }
}

#[test]
fn test_i_walks_to_right_wall() {
    let grid = Grid::new();
    let mut piece = ActivePiece::spawn(PieceKind::I);
    let mut moves = 0;
    while piece.try_translate(1, 0, &grid) {
        moves += 1;
    }
    // Horizontal I spans anchor..anchor+3; rightmost anchor is 6
    assert_eq!(moves, 2);
    assert_eq!(piece.anchor().x, 6);
}

#[test]
fn test_vertical_i_rotation_blocked_by_locked_cell() {
    let mut grid = Grid::new();
    let mut piece = ActivePiece::at(PieceKind::I, 1, CellPos::new(3, 10));
    // Horizontal state would occupy row 11, columns 3..=6
    grid.lock_cells(&[CellPos::new(3, 11)]);

    let before = piece;
    assert!(!piece.try_rotate(&grid));
    assert_eq!(piece, before);
    assert_eq!(piece.current_cells(), before.current_cells());
}

#[test]
fn test_rotation_above_field_is_allowed() {
    let mut grid = Grid::new();
    grid.fill_row(0);
    // States 0 and 1 at this anchor stay entirely above the field
    let mut piece = ActivePiece::at(PieceKind::T, 0, CellPos::new(4, -3));
    assert!(piece.try_rotate(&grid));
    assert_eq!(piece.rotation(), 1);
}

#[test]
fn test_drop_to_floor() {
    let grid = Grid::new();
    let mut piece = ActivePiece::spawn(PieceKind::T);
    while piece.try_translate(0, 1, &grid) {}
    assert!(piece.is_grounded(&grid));
    let max_row = piece.current_cells().iter().map(|c| c.y).max().unwrap();
    assert_eq!(max_row, 19);
}
