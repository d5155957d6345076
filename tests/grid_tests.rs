//! Grid tests - validity predicate and line clearing

use blockfall::core::Grid;
use blockfall::types::{CellPos, FIELD_HEIGHT, FIELD_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), FIELD_WIDTH);
    assert_eq!(grid.height(), FIELD_HEIGHT);

    for y in 0..FIELD_HEIGHT as i8 {
        for x in 0..FIELD_WIDTH as i8 {
            assert_eq!(grid.get(x, y), Some(false), "Cell ({}, {}) should be empty", x, y);
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new();

    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(FIELD_WIDTH as i8, 0), None);
    assert_eq!(grid.get(0, FIELD_HEIGHT as i8), None);
}

#[test]
fn test_is_valid_whole_set() {
    let mut grid = Grid::new();
    grid.lock_cells(&[CellPos::new(3, 10)]);

    let clear = [
        CellPos::new(0, 0),
        CellPos::new(1, 0),
        CellPos::new(2, 0),
        CellPos::new(3, 0),
    ];
    assert!(grid.is_valid(&clear));

    // One bad cell fails the whole set
    let blocked = [
        CellPos::new(2, 9),
        CellPos::new(3, 9),
        CellPos::new(2, 10),
        CellPos::new(3, 10),
    ];
    assert!(!grid.is_valid(&blocked));

    let floor = [
        CellPos::new(0, 18),
        CellPos::new(0, 19),
        CellPos::new(0, 20),
        CellPos::new(0, 21),
    ];
    assert!(!grid.is_valid(&floor));
}

#[test]
fn test_is_valid_above_field() {
    let mut grid = Grid::new();
    grid.fill_row(0);

    let hidden = [
        CellPos::new(4, -1),
        CellPos::new(5, -1),
        CellPos::new(4, -2),
        CellPos::new(5, -2),
    ];
    assert!(grid.is_valid(&hidden));
}

#[test]
fn test_lock_cells_writes_only_visible() {
    let mut grid = Grid::new();
    let written = grid.lock_cells(&[
        CellPos::new(0, -2),
        CellPos::new(0, -1),
        CellPos::new(0, 0),
        CellPos::new(0, 1),
    ]);
    assert_eq!(written, 2);
    assert!(grid.is_occupied(0, 0));
    assert!(grid.is_occupied(0, 1));
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_is_row_full() {
    let mut grid = Grid::new();
    assert!(!grid.is_row_full(19));

    for x in 0..9 {
        grid.lock_cells(&[CellPos::new(x, 19)]);
    }
    assert!(!grid.is_row_full(19));

    grid.lock_cells(&[CellPos::new(9, 19)]);
    assert!(grid.is_row_full(19));

    // Out of range rows are never full
    assert!(!grid.is_row_full(20));
}

#[test]
fn test_clear_bottom_row_only() {
    let mut grid = Grid::new();
    grid.fill_row(19);

    assert_eq!(grid.clear_full_rows(), 1);
    assert!(grid.is_empty());
}

#[test]
fn test_clear_two_bottom_rows() {
    let mut grid = Grid::new();
    grid.fill_row(18);
    grid.fill_row(19);

    assert_eq!(grid.clear_full_rows(), 2);
    assert!(grid.is_empty());
}

#[test]
fn test_clear_separated_rows() {
    let mut grid = Grid::from_ascii(&[
        "##########",
        "#.#.#.#.#.",
        "##########",
        ".........#",
    ]);

    assert_eq!(grid.clear_full_rows(), 2);

    let expected = Grid::from_ascii(&["#.#.#.#.#.", ".........#"]);
    assert_eq!(grid, expected);
}

#[test]
fn test_clear_rows_in_middle_shift_top_content() {
    let mut grid = Grid::new();
    grid.lock_cells(&[CellPos::new(2, 0), CellPos::new(7, 5)]);
    grid.fill_row(10);
    grid.fill_row(11);

    assert_eq!(grid.clear_full_rows(), 2);
    assert!(grid.is_occupied(2, 2));
    assert!(grid.is_occupied(7, 7));
    assert_eq!(grid.occupied_count(), 2);
}

#[test]
fn test_clear_preserves_locked_count() {
    let mut grid = Grid::from_ascii(&[
        "#..#......",
        "##########",
        "##.#######",
        "##########",
    ]);
    let before = grid.occupied_count();

    let cleared = grid.clear_full_rows();
    assert_eq!(cleared, 2);
    assert_eq!(grid.occupied_count(), before - cleared * FIELD_WIDTH as usize);
}

#[test]
fn test_grid_clear() {
    let mut grid = Grid::from_ascii(&["#####.....", "##########"]);
    grid.clear();
    assert!(grid.is_empty());
}
