//! Game status evaluation: checkmate, stalemate and the draw rules.

use std::fmt;

use chess_core::{Color, Piece};
use tracing::{debug, warn};

use crate::legality::{has_any_legal_move, is_king_in_check};
use crate::position::Position;
use crate::EngineError;

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of the same position (counting the current one) that draw.
pub const REPETITION_LIMIT: usize = 3;

/// Why a game ended drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawReason {
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side has the material to deliver mate.
    InsufficientMaterial,
    /// 100 half-moves without a pawn move or capture.
    FiftyMoveRule,
    /// The same position occurred three times.
    ThreefoldRepetition,
}

/// Status of a game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw(DrawReason),
}

impl GameStatus {
    /// The win for `color`.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    /// Returns true once no further moves should be accepted.
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning color, if the game was won.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        };
        write!(f, "{}", reason)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::WhiteWon => write!(f, "white won"),
            GameStatus::BlackWon => write!(f, "black won"),
            GameStatus::Draw(reason) => write!(f, "draw ({})", reason),
        }
    }
}

/// Evaluates `position` given the positions that preceded it.
///
/// `history` lists earlier positions oldest first, normally starting with
/// the game's initial position; the current position must not be included.
/// Rules are tried in order: checkmate, stalemate, insufficient material,
/// fifty-move rule, threefold repetition.
pub fn game_status(position: &Position, history: &[Position]) -> GameStatus {
    let us = position.side_to_move;
    if position.find_king(us).is_none() {
        warn!(fen = %position, color = %us, "position has no king for the side to move");
    }

    let in_check = is_king_in_check(position, us);
    let status = if !has_any_legal_move(position, us) {
        if in_check {
            GameStatus::win_for(us.opposite())
        } else {
            GameStatus::Draw(DrawReason::Stalemate)
        }
    } else if is_insufficient_material(position) {
        GameStatus::Draw(DrawReason::InsufficientMaterial)
    } else if position.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        GameStatus::Draw(DrawReason::FiftyMoveRule)
    } else if repetition_count(position, history) >= REPETITION_LIMIT {
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    } else {
        GameStatus::InProgress
    };

    if status.is_over() {
        debug!(fen = %position, %status, "game over");
    }
    status
}

/// String-level entry point over [`game_status`].
pub fn status_from_fen<S: AsRef<str>>(
    fen: &str,
    history: &[S],
) -> Result<GameStatus, EngineError> {
    let position = Position::from_fen(fen)?;
    let history = history
        .iter()
        .map(|fen| Position::from_fen(fen.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(game_status(&position, &history))
}

/// How many times the current position has occurred, itself included.
/// Positions are compared by [`Position::repetition_key`].
pub fn repetition_count(position: &Position, history: &[Position]) -> usize {
    let key = position.repetition_key();
    1 + history
        .iter()
        .filter(|earlier| earlier.repetition_key() == key)
        .count()
}

/// Returns true when there is no pawn, rook or queen on the board and each
/// side has at most one minor piece.
///
/// This does not tell two same-colored bishops apart from material that can
/// still force mate; it only recognises the bare-minor endings.
pub fn is_insufficient_material(position: &Position) -> bool {
    let mut minors = [0u8; 2];
    for (_, piece) in position.pieces() {
        match piece.piece {
            Piece::King => {}
            kind if kind.is_minor() => minors[piece.color.index()] += 1,
            _ => return false,
        }
    }
    minors.iter().all(|&count| count <= 1)
}
