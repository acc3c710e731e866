//! Engine error types.

use chess_core::{FenError, MoveParseError};
use thiserror::Error;

/// Errors returned by the string-level engine entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The FEN could not be parsed.
    #[error(transparent)]
    Fen(#[from] FenError),

    /// The move string is not valid UCI notation.
    #[error(transparent)]
    Move(#[from] MoveParseError),

    /// The move is well formed but not legal in the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
}
