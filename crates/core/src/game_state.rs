//! Game state module - the state machine
//!
//! This module ties together the grid, the active piece, the piece source and the
//! scoring policy. It validates commands, locks pieces, clears rows, tracks score and
//! level, and detects top-out. It never touches real time: a driver calls
//! [`GameState::tick`] on its own cadence and reads [`GameState::gravity_ms`].

use tracing::{debug, error, info};

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::{PieceSource, RandomPieceSource};
use crate::scoring::progress;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
///
/// The active piece is tracked apart from the grid and is written into it only
/// when it locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState<S = RandomPieceSource> {
    grid: Grid,
    active: Piece,
    source: S,
    config: GameConfig,
    score: u32,
    level: u32,
    lines_toward_next_level: u32,
    /// Total lines cleared this game
    lines: u32,
    gravity_ms: u32,
    status: Status,
    /// Successful spawns this game
    pieces_spawned: u32,
}

impl GameState<RandomPieceSource> {
    /// Start a game with the uniform random source seeded from `config.seed`
    pub fn new(config: GameConfig) -> Self {
        let source = RandomPieceSource::from_seed(config.seed);
        Self::with_source(config, source)
    }
}

impl Default for GameState<RandomPieceSource> {
    fn default() -> Self {
        Self::new(GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        })
    }
}

impl<S: PieceSource> GameState<S> {
    /// Start a game on an empty grid with a custom piece source
    pub fn with_source(config: GameConfig, source: S) -> Self {
        Self::with_grid(Grid::new(), config, source)
    }

    /// Start a game on a pre-seeded grid.
    ///
    /// If the first piece cannot spawn, the game starts in `GameOver`.
    pub fn with_grid(grid: Grid, config: GameConfig, mut source: S) -> Self {
        let first = Piece::spawn(source.next());
        let mut state = Self {
            grid,
            active: first,
            source,
            gravity_ms: config.initial_gravity_ms,
            config,
            score: 0,
            level: STARTING_LEVEL,
            lines_toward_next_level: 0,
            lines: 0,
            status: Status::Running,
            pieces_spawned: 0,
        };
        state.place_spawned(first);
        state
    }

    /// Reset everything and spawn the first piece. Valid in any status.
    pub fn start(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.level = STARTING_LEVEL;
        self.lines_toward_next_level = 0;
        self.lines = 0;
        self.gravity_ms = self.config.initial_gravity_ms;
        self.pieces_spawned = 0;
        info!(gravity_ms = self.gravity_ms, "game started");
        self.spawn_next();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece. After game over this is the piece that failed to spawn.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_toward_next_level(&self) -> u32 {
        self.lines_toward_next_level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval; shrinks on each level-up
    pub fn gravity_ms(&self) -> u32 {
        self.gravity_ms
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether every cell of `piece` is inside the grid and on an empty cell
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|&c| Grid::in_bounds(c) && matches!(self.grid.is_empty_at(c), Ok(true)))
    }

    /// Apply a player command
    pub fn apply_command(&mut self, command: Command) -> StepOutcome {
        if self.status != Status::Running {
            return StepOutcome::Ignored;
        }

        let candidate = match command {
            Command::MoveLeft => self.active.translate(0, -1),
            Command::MoveRight => self.active.translate(0, 1),
            Command::RotateCw => self.active.rotate_cw(),
            Command::RotateCcw => self.active.rotate_ccw(),
            Command::SoftDrop => self.active.translate(1, 0),
        };

        if self.fits(&candidate) {
            self.active = candidate;
            return StepOutcome::Moved;
        }

        match command {
            Command::SoftDrop => StepOutcome::Locked(self.lock_active()),
            _ => StepOutcome::Rejected,
        }
    }

    /// Gravity step; identical to a soft drop
    pub fn tick(&mut self) -> StepOutcome {
        self.apply_command(Command::SoftDrop)
    }

    /// Write the active piece into the grid, clear rows, score, and spawn the next piece.
    fn lock_active(&mut self) -> LockEvent {
        let kind = self.active.kind();
        for &cell in self.active.cells() {
            // Unreachable while the active piece is always validated before it moves.
            if let Err(err) = self.grid.set(cell, kind) {
                error!(%err, ?kind, "active piece outside grid at lock");
            }
        }

        let cleared = self.grid.clear_full_rows();
        let lines_cleared = cleared.len();

        let p = progress(
            lines_cleared,
            self.level,
            self.lines_toward_next_level,
            &self.config,
        );
        self.score = self.score.saturating_add(p.score_delta);
        self.lines = self.lines.saturating_add(lines_cleared as u32);
        self.level = p.level;
        self.lines_toward_next_level = p.lines_toward_next_level;
        self.gravity_ms = self.gravity_ms.saturating_sub(p.gravity_delta_ms).max(1);

        debug!(?kind, rows = ?cleared.as_slice(), "piece locked");
        if lines_cleared > 0 {
            info!(lines = lines_cleared, score = self.score, "rows cleared");
        }
        if p.leveled_up {
            info!(level = self.level, gravity_ms = self.gravity_ms, "level up");
        }

        // Spawn is tested only after the clear has freed whatever it frees.
        self.status = Status::Locking;
        let spawned = self.spawn_next();

        LockEvent {
            kind,
            lines_cleared: lines_cleared as u32,
            score_delta: p.score_delta,
            leveled_up: p.leveled_up,
            game_over: !spawned,
        }
    }

    /// Draw and place the next piece; returns false on top-out
    fn spawn_next(&mut self) -> bool {
        let piece = Piece::spawn(self.source.next());
        self.place_spawned(piece)
    }

    fn place_spawned(&mut self, piece: Piece) -> bool {
        self.active = piece;
        let blocked = piece.cells().iter().any(|&c| !self.grid.is_free(c));
        if blocked {
            self.status = Status::GameOver;
            info!(
                kind = ?piece.kind(),
                score = self.score,
                level = self.level,
                "game over"
            );
            return false;
        }

        self.status = Status::Running;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(kind = ?piece.kind(), "spawned piece");
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_rows(&mut out.grid);
        out.active = match self.status {
            Status::GameOver => None,
            _ => Some(ActiveSnapshot::from(&self.active)),
        };
        out.score = self.score;
        out.level = self.level;
        out.lines_toward_next_level = self.lines_toward_next_level;
        out.lines = self.lines;
        out.gravity_ms = self.gravity_ms;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
