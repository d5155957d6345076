//! Core engine - pure, deterministic, and testable
//!
//! This crate owns every game rule: the shape catalog, the active piece,
//! the field grid, line clearing, scoring, and the session that ties them
//! together. It has no dependencies on rendering, timers, input devices, or
//! I/O, so it runs the same in a terminal, a GUI, or a headless test.
//!
//! # Module Structure
//!
//! - [`shapes`]: rotation-state tables for every piece kind
//! - [`piece`]: the active piece and its translate/rotate attempts
//! - [`grid`]: 10x20 field, the validity predicate, and line clearing
//! - [`scoring`]: score, line, and level progression plus gravity cadence
//! - [`rng`]: piece-kind sources for spawns
//! - [`session`]: the game session a shell drives
//! - [`snapshot`]: plain render state for a frame
//! - [`config`]: session configuration
//!
//! # Game Rules
//!
//! - **Spawn**: every piece appears at anchor (4, -1) in rotation 0; if it
//!   does not fit, the game is over
//! - **Movement**: left, right, and down by one cell; illegal moves are ignored
//! - **Rotation**: next state in the kind's table, no wall kicks
//! - **Lock**: a piece that cannot move down is written into the field
//! - **Clears**: full rows collapse; score is `lines * 100 * level`
//! - **Level**: `1 + lines / 10`
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_types::Command;
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//! while game.soft_drop() {}
//!
//! let event = game.take_last_event().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! The engine keeps no clock. The shell calls
//! [`GameSession::soft_drop`](session::GameSession::soft_drop) on its own
//! timer, using [`GameSession::drop_interval_ms`](session::GameSession::drop_interval_ms)
//! as the cadence (500ms at level 1).

pub mod config;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::SessionConfig;
pub use grid::Grid;
pub use piece::{ActivePiece, PieceCells};
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, ScoreState};
pub use session::GameSession;
pub use shapes::{get_shape, rotation_states, PieceShape};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
