//! Simulator error type.
//!
//! Sub-crates define their own error enums for their own failure modes and
//! wrap `FfError` as one variant where configuration problems can surface.

use thiserror::Error;

/// The top-level error type for `ff-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ff-*` crates.
pub type FfResult<T> = Result<T, FfError>;
