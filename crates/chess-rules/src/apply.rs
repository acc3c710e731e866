//! Applying legal moves.

use chess_core::{ColoredPiece, Piece, UciMove};
use tracing::{debug, trace};

use crate::legality::{castle_side, en_passant_victim, is_legal, is_promoting};
use crate::position::{CastleSide, Position};
use crate::EngineError;

/// Plays `mv` for the side to move and returns the resulting position.
///
/// The move is checked with [`is_legal`] first; an illegal move returns
/// [`EngineError::IllegalMove`] and `position` is left as it was.
pub fn apply_move(position: &Position, mv: UciMove) -> Result<Position, EngineError> {
    let mut next = play_move(position, mv)?;
    next.advance_turn();
    trace!(mv = %mv, fen = %next, "applied move");
    Ok(next)
}

/// String-level entry point: parses `fen` and `uci`, applies the move and
/// returns the new FEN.
pub fn apply_uci(fen: &str, uci: &str) -> Result<String, EngineError> {
    let position = Position::from_fen(fen)?;
    let mv = UciMove::parse(uci)?;
    let mut next = play_move(&position, mv)?;
    Ok(next.to_fen_advancing_turn())
}

/// Every effect of `mv` except handing the turn over.
fn play_move(position: &Position, mv: UciMove) -> Result<Position, EngineError> {
    let piece = match position.piece_at(mv.from) {
        Some(piece) if is_legal(position, mv, true) => piece,
        _ => {
            debug!(mv = %mv, fen = %position, "rejected illegal move");
            return Err(EngineError::IllegalMove(mv.to_uci()));
        }
    };

    let mut next = position.clone();
    let us = piece.color;
    let captured = position.piece_at(mv.to);

    if let Some(taken) = captured {
        if taken.piece == Piece::Rook {
            if let Some((owner, side)) = CastleSide::from_rook_home(mv.to) {
                next.castling.revoke(owner, side);
            }
        }
    }

    match piece.piece {
        Piece::King => next.castling.revoke_all(us),
        Piece::Rook => {
            if let Some((owner, side)) = CastleSide::from_rook_home(mv.from) {
                if owner == us {
                    next.castling.revoke(owner, side);
                }
            }
        }
        _ => {}
    }

    let en_passant_victim = en_passant_victim(position, piece, mv.from, mv.to);

    next.set_piece(mv.to, Some(piece));
    next.set_piece(mv.from, None);

    if piece.piece == Piece::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.en_passant = None;
    if piece.piece == Piece::Pawn && mv.from.file() == mv.to.file() {
        let advanced = mv.to.rank() as i8 - mv.from.rank() as i8;
        if advanced.abs() == 2 {
            next.en_passant = mv.from.offset(us.pawn_direction(), 0);
        }
    }

    if let Some(victim) = en_passant_victim {
        next.set_piece(victim, None);
        next.halfmove_clock = 0;
    }

    if is_promoting(piece, mv.to) {
        let promoted = mv.promotion.unwrap_or(Piece::Queen);
        next.set_piece(mv.to, Some(ColoredPiece::new(us, promoted)));
    }

    if let Some(side) = castle_side(piece, mv.from, mv.to) {
        next.relocate_castling_rook(mv.from.rank(), side);
    }

    Ok(next)
}
