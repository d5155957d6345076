//! Shared engine types - dimensions, constants, and plain data
//!
//! Everything here is pure data with no game logic, so the engine core, the
//! replay driver, and any external shell can agree on one vocabulary.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (4, -1) for every piece kind
//!
//! Rows above the field (`y < 0`) exist only for the active piece; nothing
//! is ever locked there.
//!
//! # Timing and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 500 | Gravity cadence at level 1 |
//! | `DROP_STEP_MS` | 40 | Cadence reduction per level above 1 |
//! | `DROP_INTERVAL_FLOOR_MS` | 100 | Fastest cadence |
//! | `LINE_SCORE` | 100 | Points per cleared line, times level |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines per level step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(PieceKind::parse("t"), Some(PieceKind::T));
//! assert_eq!(Command::parse("softDrop"), Some(Command::SoftDrop));
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u8 = 20;

/// Spawn anchor column
pub const SPAWN_X: i8 = 4;

/// Spawn anchor row (one row above the visible field)
pub const SPAWN_Y: i8 = -1;

/// Gravity cadence at level 1 (500ms per row)
pub const BASE_DROP_MS: u32 = 500;

/// Cadence reduction per level when level gravity is enabled
pub const DROP_STEP_MS: u32 = 40;

/// Fastest gravity cadence
pub const DROP_INTERVAL_FLOOR_MS: u32 = 100;

/// Base points per cleared line (multiplied by the level before the clear)
pub const LINE_SCORE: u32 = 100;

/// Cleared lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Number of occupied cells in every piece
pub const CELLS_PER_PIECE: usize = 4;

/// Absolute field coordinate (or an offset from a piece anchor)
///
/// `x` is the column, `y` is the row; rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i8,
    pub y: i8,
}

impl CellPos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`, wrapping on overflow
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Whether this position lies inside the visible field
    pub fn in_field(self) -> bool {
        self.x >= 0 && self.x < FIELD_WIDTH as i8 && self.y >= 0 && self.y < FIELD_HEIGHT as i8
    }
}

/// Piece kinds known to the shape catalog
///
/// - **I**: straight bar, two rotation states
/// - **O**: 2x2 square, one rotation state
/// - **T**: T-shaped, four rotation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
}

impl PieceKind {
    /// Every kind, in catalog order (uniform spawn draws index into this)
    pub const ALL: [PieceKind; 3] = [PieceKind::I, PieceKind::O, PieceKind::T];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::parse("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::parse("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::parse("z"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
        }
    }
}

/// Commands a shell feeds into a game session
///
/// Every command is safe to send at any time; commands that are not legal
/// in the current state are ignored by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Reset everything and spawn a fresh piece
    NewGame,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Toggle pause
    Pause,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::parse("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::parse("NEWGAME"), Some(Command::NewGame));
    /// assert_eq!(Command::parse("hardDrop"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "newgame" => Some(Command::NewGame),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotate" => Some(Command::Rotate),
            "pause" => Some(Command::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::NewGame => "newGame",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::Rotate => "rotate",
            Command::Pause => "pause",
        }
    }
}

/// Horizontal or downward movement of the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Anchor delta for one step in this direction
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Summary of one piece lock, emitted by the session
///
/// Readable once per lock; shells use it for effects and sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockEvent {
    /// Cells written into the field (cells above the top row are dropped)
    pub cells_locked: u32,
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// Level after the clear was applied
    pub level: u32,
    /// Whether the follow-up spawn ended the game
    pub game_over: bool,
}
