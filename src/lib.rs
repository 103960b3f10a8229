//! Gridfall (workspace facade crate).
//!
//! Re-exports the engine crates under one name: `gridfall::{types, core, adapter}`.
//! The implementation lives in dedicated crates under `crates/`.

pub use gridfall_adapter as adapter;
pub use gridfall_core as core;
pub use gridfall_types as types;
