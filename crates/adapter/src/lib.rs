//! Adapter - drives a game on a clock from a single-writer queue
//!
//! The core is synchronous and assumes calls never overlap. This crate gives it a
//! thin shell that owns the two things the core refuses to: real time and
//! concurrent producers.
//!
//! - Every input (player command, restart, shutdown) goes through one bounded
//!   queue and is applied in arrival order by one task.
//! - A gravity timer ticks at [`GameState::gravity_ms`](crate::core::GameState::gravity_ms)
//!   and is rebuilt whenever a level-up changes the interval.
//! - The latest [`GameSnapshot`](crate::core::GameSnapshot) is published on a watch
//!   channel; lock events are streamed in order.
//!
//! Use [`run_game_loop`] from an existing tokio runtime, or [`Adapter`] from
//! synchronous code (it brings its own runtime).
//!
//! # Environment Variables
//!
//! - `GRIDFALL_MAX_PENDING`: inbound queue capacity (default: 64)
//! - `GRIDFALL_GRAVITY_MS`, `GRIDFALL_GRAVITY_STEP_MS`, `GRIDFALL_LINES_PER_LEVEL`,
//!   `GRIDFALL_LAST_SPEEDUP_LEVEL`, `GRIDFALL_SEED`: see
//!   [`GameConfig::from_env`](crate::core::GameConfig::from_env)

pub mod config;
pub mod runtime;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use config::AdapterConfig;
pub use runtime::{run_game_loop, Adapter, Inbound};
