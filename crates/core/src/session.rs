//! Session module - the game a shell drives
//!
//! Ties together the grid, the active piece, the piece source, and the
//! score tracker. It handles spawn, movement, rotation, lock, line clears,
//! and the game-over transition.
//!
//! The session is either playing or over. It goes over only when a fresh
//! piece does not fit the grid, and only [`GameSession::new_game`] brings
//! it back. Every command is synchronous and safe to send in any state;
//! commands that do not apply are ignored.

use crate::config::SessionConfig;
use crate::grid::Grid;
use crate::piece::{ActivePiece, PieceCells};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{get_drop_interval_ms, ScoreState};
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{Command, Direction, LockEvent, BASE_DROP_MS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<S: PieceSource = UniformSource> {
    grid: Grid,
    /// Absent only while the game is over
    active: Option<ActivePiece>,
    score: ScoreState,
    source: S,
    config: SessionConfig,
    paused: bool,
    game_over: bool,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession<UniformSource> {
    /// Start a new game with a uniform piece source seeded by `seed`
    pub fn new(seed: u32) -> Self {
        Self::from_config(SessionConfig::default().with_seed(seed))
    }

    /// Start a new game from a configuration
    pub fn from_config(config: SessionConfig) -> Self {
        Self::with_source(UniformSource::new(config.seed), config)
    }

    /// Seed of the piece source
    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Start a new game drawing kinds from `source`
    pub fn with_source(source: S, config: SessionConfig) -> Self {
        let mut session = Self {
            grid: Grid::new(),
            active: None,
            score: ScoreState::new(),
            source,
            config,
            paused: false,
            game_over: false,
            last_event: None,
        };
        session.new_game();
        session
    }

    /// Start on a prepared grid instead of an empty one
    ///
    /// The first piece spawns against `grid`, so a grid blocked at the spawn
    /// area produces a session that is already over.
    pub fn from_grid(grid: Grid, source: S, config: SessionConfig) -> Self {
        let mut session = Self {
            grid,
            active: None,
            score: ScoreState::new(),
            source,
            config,
            paused: false,
            game_over: false,
            last_event: None,
        };
        session.spawn();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Absolute cells of the active piece (for rendering)
    pub fn active_cells(&self) -> Option<PieceCells> {
        self.active.map(|p| p.current_cells())
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn lines(&self) -> u32 {
        self.score.lines()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether movement commands currently apply
    ///
    /// Pause does not gate player commands; it only suspends [`Self::tick`].
    fn can_act(&self) -> bool {
        !self.game_over && self.active.is_some()
    }

    /// Reset every field to its start state and spawn the first piece
    ///
    /// Legal from any state; this is the only way out of game over.
    pub fn new_game(&mut self) {
        self.grid.clear();
        self.score.reset();
        self.active = None;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
        self.spawn();
    }

    /// Spawn a new piece from the source
    ///
    /// If it does not fit at the spawn anchor, the game is over and no piece
    /// is active. The grid is never touched. Returns true if a piece spawned.
    pub fn spawn(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let piece = ActivePiece::spawn(self.source.next_kind());
        if !piece.is_valid(&self.grid) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece one step
    ///
    /// A rejected downward move locks the piece. Returns true if the piece
    /// moved.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let (dx, dy) = direction.delta();
        if piece.try_translate(dx, dy, &self.grid) {
            self.active = Some(piece);
            return true;
        }

        if direction == Direction::Down {
            self.lock_piece();
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(Direction::Right)
    }

    /// One row down; locks the piece when it cannot move
    pub fn soft_drop(&mut self) -> bool {
        self.move_piece(Direction::Down)
    }

    /// Gravity step for the shell's timer, every `drop_interval_ms`
    ///
    /// Same as [`Self::soft_drop`], but does nothing while paused.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.soft_drop()
    }

    /// Try to advance the active piece to its next rotation state
    pub fn rotate(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let rotated = piece.try_rotate(&self.grid);
        self.active = Some(piece);
        rotated
    }

    /// Lock the active piece into the grid, clear lines, and spawn the next
    pub fn lock_piece(&mut self) {
        if self.game_over {
            return;
        }
        let Some(piece) = self.active.take() else {
            return;
        };

        let cells_locked = self.grid.lock_cells(&piece.visible_cells());
        let lines_cleared = self.grid.clear_full_rows() as u32;
        let score_gained = self.score.apply_clear(lines_cleared);

        self.spawn();

        self.last_event = Some(LockEvent {
            cells_locked: cells_locked as u32,
            lines_cleared,
            score_gained,
            level: self.score.level(),
            game_over: self.game_over,
        });
    }

    /// Toggle gravity suspension; ignored once the game is over
    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Current gravity cadence for the shell's timer
    pub fn drop_interval_ms(&self) -> u32 {
        if self.config.level_gravity {
            get_drop_interval_ms(self.score.level())
        } else {
            BASE_DROP_MS
        }
    }

    /// Apply a shell command
    ///
    /// Returns true if the command changed the session.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::NewGame => {
                self.new_game();
                true
            }
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::SoftDrop => {
                let acting = self.can_act();
                self.soft_drop() || acting
            }
            Command::Rotate => self.rotate(),
            Command::Pause => self.toggle_pause(),
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score.score();
        out.lines = self.score.lines();
        out.level = self.score.level();
        out.drop_interval_ms = self.drop_interval_ms();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}
