//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and the state machine of the falling-block game.
//! It has **zero dependencies** on rendering, input devices, or real time, making it:
//!
//! - **Deterministic**: a seeded or scripted piece source replays identical games
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: any driver (terminal, GUI, headless) can own the clock
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 matrix of locked cells with atomic line clearing
//! - [`piece`]: tetromino spawn layouts, translation, and pivot rotation
//! - [`game_state`]: the active piece, locking, scoring, level progression, top-out
//! - [`rng`]: pluggable piece sources (uniform random, scripted)
//! - [`scoring`]: pure line-clear score and level/speed policy
//! - [`snapshot`]: read-only copies for presentation layers
//! - [`config`]: gravity and level parameters
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece kind is drawn independently with equal odds
//! - **Pivot rotation**: 90° around a fixed per-kind pivot, no wall kicks; O never rotates
//! - **Locking**: a blocked downward move (soft drop or gravity) locks immediately
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 rows, no level multiplier
//! - **Levels**: every 10 rows, gravity speeds up by 30ms through level 10
//!
//! # Example
//!
//! ```
//! use gridfall_core::{GameConfig, GameState, ScriptedPieceSource};
//! use gridfall_types::{Command, PieceKind, StepOutcome};
//!
//! let mut game = GameState::with_source(
//!     GameConfig::default(),
//!     ScriptedPieceSource::new([PieceKind::O]),
//! );
//!
//! assert_eq!(game.apply_command(Command::MoveLeft), StepOutcome::Moved);
//! assert_eq!(game.tick(), StepOutcome::Moved);
//! assert_eq!(game.score(), 0);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{CoreError, CoreResult};
pub use game_state::GameState;
pub use grid::{ClearedRows, Grid};
pub use piece::{spawn_layout, Piece, PieceCells};
pub use rng::{PieceSource, RandomPieceSource, ScriptedPieceSource, SimpleRng};
pub use scoring::{line_clear_score, progress, Progress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
