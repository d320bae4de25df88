use ff_core::{Cell, FfError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FfError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{what} entry {cell} lies outside the {size}×{size} grid")]
    OutOfBounds {
        what: &'static str,
        cell: Cell,
        size: i32,
    },

    #[error("forest is {got}×{got} but the configuration asks for {expected}×{expected}")]
    ForestSize { expected: i32, got: i32 },
}

pub type SimResult<T> = Result<T, SimError>;
