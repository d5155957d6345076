//! Shapes module - the piece shape catalog
//!
//! Each piece kind owns an ordered table of rotation states. A state is a
//! fixed set of 4 cell offsets from the piece anchor. Rotation walks the
//! table in order and wraps, so a kind with a single state (O) never
//! changes shape when rotated.

use crate::types::{PieceKind, CELLS_PER_PIECE};

/// Offset of a single cell relative to the piece anchor (dx, dy)
pub type CellOffset = (i8, i8);

/// One rotation state - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; CELLS_PER_PIECE];

/// I piece: horizontal, then vertical
const I_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

/// O piece: a single state
const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

/// T piece: point up, right, down, left
const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(1, 1), (0, 2), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

/// All rotation states for a piece kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Number of rotation states for a piece kind
pub fn state_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Get the shape for a piece kind and rotation index
///
/// The index wraps modulo the kind's state count, so any index is accepted.
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Rotation index that follows `rotation` for this kind
pub fn next_rotation(kind: PieceKind, rotation: usize) -> usize {
    (rotation + 1) % state_count(kind)
}
