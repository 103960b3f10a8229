//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and formatting, making
//! them usable from the core state machine, the adapter, and any presentation layer.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Pieces fall along increasing row.
//!
//! # Timing Defaults
//!
//! Timing values are in milliseconds and are driver-owned; the core only reports
//! the current gravity interval.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRAVITY_MS` | 400 | Gravity interval at level 1 |
//! | `GRAVITY_STEP_MS` | 30 | Interval decrease per level-up |
//! | `LINES_PER_LEVEL` | 10 | Lines needed for a level-up |
//! | `LAST_SPEEDUP_LEVEL` | 10 | Level-ups only happen while level <= this |
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{Command, Coordinate, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let cmd = Command::from_str("rotateCw").unwrap();
//! assert_eq!(cmd, Command::RotateCw);
//!
//! let c = Coordinate::new(3, 4).offset(1, -1);
//! assert_eq!(c, Coordinate::new(4, 3));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (400ms per row)
pub const DEFAULT_GRAVITY_MS: u32 = 400;

/// Gravity interval decrease applied on each level-up
pub const GRAVITY_STEP_MS: u32 = 30;

/// Lines that must accumulate before a level-up
pub const LINES_PER_LEVEL: u32 = 10;

/// Level-ups are granted only while the current level is at most this value
pub const LAST_SPEEDUP_LEVEL: u32 = 10;

/// Level a fresh game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Line clear scoring table, indexed by rows cleared in one lock
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// There is no level multiplier.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];


/// The seven tetromino piece kinds
///
/// - **I**: straight bar
/// - **J**: L-shape with the foot to the right
/// - **L**: mirror of J
/// - **T**: T-shape
/// - **S**: S-shape
/// - **Z**: Z-shape (mirror of S)
/// - **O**: 2x2 square, has no orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    T,
    S,
    Z,
    O,
}

impl PieceKind {
    /// Every kind, in the order the random source indexes them
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::O,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::O => "o",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Grid position. Rows grow downward (0 = top), columns grow rightward (0 = left).
///
/// Signed so that candidate positions just outside the grid can be represented
/// and rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i8,
    pub col: i8,
}

impl Coordinate {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Shift by a row/column delta, saturating at the `i8` range
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

/// Player commands accepted by the core
///
/// Gravity uses the same path as `SoftDrop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise around its pivot
    RotateCw,
    /// Rotate piece 90° counter-clockwise around its pivot
    RotateCcw,
    /// Move piece one cell down; locks the piece when blocked
    SoftDrop,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::SoftDrop,
    ];

    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateCcw"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdrop" => Some(Command::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDrop => "softDrop",
        }
    }
}

/// Lifecycle status of a game
///
/// - **Running**: commands and gravity are applied
/// - **Locking**: transient, the active piece was written into the grid and the next
///   piece has not been placed yet
/// - **GameOver**: terminal until the next `start()`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Running,
    Locking,
    GameOver,
}

/// Event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub leveled_up: bool,
    /// The next piece could not spawn.
    pub game_over: bool,
}

/// Result of a command or gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The active piece took the candidate position.
    Moved,
    /// The candidate position was invalid; nothing changed.
    Rejected,
    /// A blocked downward move locked the piece.
    Locked(LockEvent),
    /// The game is not running; nothing changed.
    Ignored,
}
