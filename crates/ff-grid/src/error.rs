//! Grid error type.

use thiserror::Error;

use ff_core::Cell;

/// Errors produced by `ff-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {0} already holds a tree")]
    Occupied(Cell),
}

pub type GridResult<T> = Result<T, GridError>;
