//! Maze-subsystem error type.

use thiserror::Error;

/// Errors produced by `gt-maze`.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("maze parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
