//! UCI move descriptors.

use crate::{Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when a UCI move string is structurally malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid UCI move '{0}': expected 4 or 5 characters")]
    InvalidLength(String),

    #[error("invalid UCI move '{0}': bad square '{1}'")]
    InvalidSquare(String, String),

    #[error("invalid UCI move '{0}': promotion must be one of q, r, b, n")]
    InvalidPromotion(String),
}

/// A move as received from a caller: source, destination and an optional
/// promotion piece.
///
/// This carries no knowledge of the position. Whether the move is a
/// capture, castle, double push or en passant is decided by the engine when
/// the move is checked against a position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UciMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl UciMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        UciMove {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, piece: Piece) -> Self {
        UciMove {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Parses a move in UCI notation (`e2e4`, `e7e8q`).
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength(s.to_string()));
        }
        let square = |part: &str| {
            Square::from_algebraic(part)
                .ok_or_else(|| MoveParseError::InvalidSquare(s.to_string(), part.to_string()))
        };
        let from = square(&s[0..2])?;
        let to = square(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            Some(c) => Some(
                Piece::from_promotion_char(c)
                    .ok_or_else(|| MoveParseError::InvalidPromotion(s.to_string()))?,
            ),
            None => None,
        };
        Ok(UciMove {
            from,
            to,
            promotion,
        })
    }

    /// Returns the UCI notation for this move.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl FromStr for UciMove {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UciMove({})", self)
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}
