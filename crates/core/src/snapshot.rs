use serde::{Deserialize, Serialize};

use crate::piece::ActivePiece;
use crate::types::{CellPos, PieceKind, CELLS_PER_PIECE, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub anchor: CellPos,
    pub cells: [CellPos; CELLS_PER_PIECE],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            anchor: value.anchor(),
            cells: value.current_cells(),
        }
    }
}

/// Everything a shell needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: [[bool; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl SessionSnapshot {
    /// Whether the shell's gravity timer should be running
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            grid: [[false; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 0,
            paused: false,
            game_over: false,
        }
    }
}
