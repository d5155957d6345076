//! Piece module - the active falling piece
//!
//! A piece is a kind, a rotation index into the kind's state table, and an
//! anchor position. State only changes through [`ActivePiece::try_translate`]
//! and [`ActivePiece::try_rotate`], and both consult the grid first, so a
//! piece never holds a position the grid would reject.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::shapes::{get_shape, next_rotation, state_count};
use crate::types::{CellPos, PieceKind, CELLS_PER_PIECE, SPAWN_X, SPAWN_Y};

/// Absolute cells of a piece
pub type PieceCells = [CellPos; CELLS_PER_PIECE];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    rotation: usize,
    anchor: CellPos,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor, rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            anchor: CellPos::new(SPAWN_X, SPAWN_Y),
        }
    }

    /// Create a piece at an arbitrary placement (for testing and replays)
    ///
    /// Cell coordinates wrap on `i8` overflow, so an anchor far outside the
    /// field yields cells the grid rejects rather than a panic.
    pub fn at(kind: PieceKind, rotation: usize, anchor: CellPos) -> Self {
        Self {
            kind,
            rotation: rotation % state_count(kind),
            anchor,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn anchor(&self) -> CellPos {
        self.anchor
    }

    /// Absolute cells: anchor + offsets of the current rotation state
    pub fn current_cells(&self) -> PieceCells {
        Self::cells_for(self.kind, self.rotation, self.anchor)
    }

    /// Cells of the current rotation that lie inside the field
    pub fn visible_cells(&self) -> ArrayVec<CellPos, CELLS_PER_PIECE> {
        self.current_cells()
            .into_iter()
            .filter(|pos| pos.y >= 0)
            .collect()
    }

    fn cells_for(kind: PieceKind, rotation: usize, anchor: CellPos) -> PieceCells {
        get_shape(kind, rotation).map(|(dx, dy)| anchor.offset(dx, dy))
    }

    /// Check if the piece fits the grid where it is
    pub fn is_valid(&self, grid: &Grid) -> bool {
        grid.is_valid(&self.current_cells())
    }

    /// Try to shift the anchor by (dx, dy)
    ///
    /// Returns true and commits the move if the shifted cells are valid;
    /// otherwise nothing changes and false is returned.
    pub fn try_translate(&mut self, dx: i8, dy: i8, grid: &Grid) -> bool {
        let candidate = self.anchor.offset(dx, dy);
        if !grid.is_valid(&Self::cells_for(self.kind, self.rotation, candidate)) {
            return false;
        }
        self.anchor = candidate;
        true
    }

    /// Try to advance to the next rotation state
    ///
    /// No kicks: the rotated cells are tested at the same anchor and the
    /// rotation is kept only if they are valid. A kind with one state
    /// rotates onto itself.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        let candidate = next_rotation(self.kind, self.rotation);
        if !grid.is_valid(&Self::cells_for(self.kind, candidate, self.anchor)) {
            return false;
        }
        self.rotation = candidate;
        true
    }

    /// Check if the piece cannot move one row down
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        let below = self.anchor.offset(0, 1);
        !grid.is_valid(&Self::cells_for(self.kind, self.rotation, below))
    }
}
