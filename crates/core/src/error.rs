//! Core error type.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A grid address outside `[0, 20) x [0, 10)`.
    #[error("coordinate ({row}, {col}) is outside the grid")]
    OutOfBounds { row: i8, col: i8 },
}

pub type CoreResult<T> = Result<T, CoreError>;
