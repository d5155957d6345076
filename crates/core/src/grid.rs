//! Grid module - the 10x20 field of locked cells
//!
//! Uses a flat row-major array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the field (y < 0) are never stored.
//!
//! The grid is the single source of truth for placement legality: the
//! validity predicate here decides both movement and spawn failure.

use crate::types::{CellPos, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;

/// Total number of cells on the field
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// The playing field - 10 columns x 20 rows of locked/empty cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; FIELD_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [false; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_WIDTH as i8 || y < 0 || y >= FIELD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// Whether the cell at (x, y) is locked
    ///
    /// Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and locked
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Check whether a single cell may hold part of the active piece
    ///
    /// Outside the side walls or below the floor fails. Anywhere above the
    /// field passes, since nothing can be locked there. Otherwise the cell
    /// must be empty.
    #[inline]
    pub fn is_cell_valid(&self, pos: CellPos) -> bool {
        if pos.x < 0 || pos.x >= FIELD_WIDTH as i8 || pos.y >= FIELD_HEIGHT as i8 {
            return false;
        }
        if pos.y < 0 {
            return true;
        }
        !self.is_occupied(pos.x, pos.y)
    }

    /// Validity predicate for a candidate cell set
    ///
    /// True only if every cell passes [`Grid::is_cell_valid`].
    pub fn is_valid(&self, cells: &[CellPos]) -> bool {
        cells.iter().all(|&pos| self.is_cell_valid(pos))
    }

    /// Lock the given cells into the grid
    ///
    /// Cells above the field are dropped silently; they belong to a piece
    /// that settled while still partially above the top row. Returns how
    /// many cells were written.
    pub fn lock_cells(&mut self, cells: &[CellPos]) -> usize {
        let mut written = 0;
        for &pos in cells {
            if pos.y < 0 {
                continue;
            }
            match Self::index(pos.x, pos.y) {
                Some(idx) => {
                    self.cells[idx] = true;
                    written += 1;
                }
                None => debug_assert!(false, "locking cell outside the field: {:?}", pos),
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|&cell| cell)
    }

    /// Remove row `y`, shift every row above it down by one, empty row 0
    fn collapse_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * WIDTH;
            self.cells
                .copy_within(src_start..src_start + WIDTH, row * WIDTH);
        }
        for cell in &mut self.cells[..WIDTH] {
            *cell = false;
        }
    }

    /// Clear every full row and return how many were cleared
    ///
    /// Scans from the bottom row up. After collapsing a full row the same
    /// index is examined again, because the row that moved into it may be
    /// full as well.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of locked cells on the field
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if no cell is locked
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Write the occupancy into a row-major 2D array (for rendering)
    pub fn write_rows(&self, out: &mut [[bool; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [false; FIELD_SIZE];
    }

    /// Build a grid from ASCII rows, bottom-aligned (for testing)
    ///
    /// `#` marks a locked cell, anything else is empty. Rows not given are
    /// empty; the last string is row 19.
    pub fn from_ascii(rows: &[&str]) -> Self {
        assert!(rows.len() <= HEIGHT, "too many rows");
        let mut grid = Self::new();
        let top = HEIGHT - rows.len();
        for (i, line) in rows.iter().enumerate() {
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                if ch == '#' {
                    grid.cells[(top + i) * WIDTH + x] = true;
                }
            }
        }
        grid
    }

    /// Fill row `y` completely (for testing)
    pub fn fill_row(&mut self, y: usize) {
        assert!(y < HEIGHT, "row out of range");
        for cell in &mut self.cells[y * WIDTH..(y + 1) * WIDTH] {
            *cell = true;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
