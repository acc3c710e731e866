//! Move legality.
//!
//! Legality is decided square by square on the mailbox board: a move must
//! fit the moving piece's geometry (with clear paths for sliders), must not
//! capture a friendly piece, and must not leave the mover's king attacked.
//! The last check plays the move out on a copy of the position.
//!
//! Move enumeration is deliberately brute force: every (from, to) pair of
//! the side's pieces is tried. It only runs once per applied move when the
//! resulting status is evaluated, never inside a search.

use chess_core::{Color, ColoredPiece, Piece, Square, UciMove};

use crate::position::{CastleSide, Position};

/// Returns true if `mv` is legal in `position`.
///
/// With `enforce_turn` the moving piece must belong to the side to move;
/// without it any piece on the board may be tried, which is how
/// [`has_any_legal_move`] probes the side it is asked about.
///
/// A promotion letter is only accepted on a pawn move to the last rank.
/// Leaving it off such a move is legal and promotes to a queen.
pub fn is_legal(position: &Position, mv: UciMove, enforce_turn: bool) -> bool {
    let Some(piece) = position.piece_at(mv.from) else {
        return false;
    };

    if enforce_turn && piece.color != position.side_to_move {
        return false;
    }

    if let Some(target) = position.piece_at(mv.to) {
        if target.color == piece.color {
            return false;
        }
    }

    if mv.promotion.is_some() && !is_promoting(piece, mv.to) {
        return false;
    }

    if !is_pseudo_legal(position, piece, mv.from, mv.to) {
        return false;
    }

    let mut simulated = position.clone();
    play_on_board(&mut simulated, piece, mv.from, mv.to);
    !is_king_in_check(&simulated, piece.color)
}

/// Returns true if a pawn arriving on `to` promotes there.
#[inline]
pub(crate) fn is_promoting(piece: ColoredPiece, to: Square) -> bool {
    piece.piece == Piece::Pawn && to.rank() == piece.color.promotion_rank()
}

/// Moves `piece` on the board only: the castling rook follows the king and
/// an en passant victim is lifted. Rights, clocks and turn are untouched.
fn play_on_board(board: &mut Position, piece: ColoredPiece, from: Square, to: Square) {
    let en_passant_victim = en_passant_victim(board, piece, from, to);

    board.set_piece(to, Some(piece));
    board.set_piece(from, None);

    if let Some(victim) = en_passant_victim {
        board.set_piece(victim, None);
    }
    if let Some(side) = castle_side(piece, from, to) {
        board.relocate_castling_rook(from.rank(), side);
    }
}

/// The square of the pawn taken en passant when `piece` moves diagonally
/// onto an empty square. Only an enemy pawn behind the target counts.
/// Must be asked before the move is played.
pub(crate) fn en_passant_victim(
    position: &Position,
    piece: ColoredPiece,
    from: Square,
    to: Square,
) -> Option<Square> {
    let diagonal = from.file() != to.file();
    if piece.piece != Piece::Pawn || !diagonal || position.piece_at(to).is_some() {
        return None;
    }
    let enemy_pawn = ColoredPiece::new(piece.color.opposite(), Piece::Pawn);
    to.offset(-piece.color.pawn_direction(), 0)
        .filter(|&victim| position.piece_at(victim) == Some(enemy_pawn))
}

/// The castling side when a king steps two files along its rank.
pub(crate) fn castle_side(piece: ColoredPiece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.piece != Piece::King || from.rank() != to.rank() {
        return None;
    }
    match to.file() as i8 - from.file() as i8 {
        2 => Some(CastleSide::Kingside),
        -2 => Some(CastleSide::Queenside),
        _ => None,
    }
}

#[inline]
fn delta(from: Square, to: Square) -> (i8, i8) {
    (
        to.rank() as i8 - from.rank() as i8,
        to.file() as i8 - from.file() as i8,
    )
}

/// Geometry and occupancy rules for one piece, ignoring king safety.
fn is_pseudo_legal(position: &Position, piece: ColoredPiece, from: Square, to: Square) -> bool {
    match piece.piece {
        Piece::Pawn => is_pawn_move_valid(position, piece.color, from, to),
        Piece::King if castle_side(piece, from, to).is_some() => {
            is_legal_castling(position, piece.color, from, to)
        }
        _ => attacks(position, piece, from, to),
    }
}

/// Returns true if `piece` standing on `from` attacks `target`.
///
/// Pawns attack diagonally forward whether or not the target is occupied,
/// kings attack their eight neighbours, sliders need a clear line.
fn attacks(position: &Position, piece: ColoredPiece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    let (dr, df) = delta(from, target);
    match piece.piece {
        Piece::Pawn => dr == piece.color.pawn_direction() && df.abs() == 1,
        Piece::Knight => matches!((dr.abs(), df.abs()), (1, 2) | (2, 1)),
        Piece::King => dr.abs() <= 1 && df.abs() <= 1,
        Piece::Rook => (dr == 0 || df == 0) && is_path_clear(position, from, target),
        Piece::Bishop => dr.abs() == df.abs() && is_path_clear(position, from, target),
        Piece::Queen => {
            (dr == 0 || df == 0 || dr.abs() == df.abs()) && is_path_clear(position, from, target)
        }
    }
}

fn is_pawn_move_valid(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let dir = color.pawn_direction();
    let (dr, df) = delta(from, to);
    let target = position.piece_at(to);

    match df.abs() {
        0 if dr == dir => target.is_none(),
        0 if dr == 2 * dir && from.rank() == color.pawn_rank() => {
            let skipped = from.offset(dir, 0).and_then(|mid| position.piece_at(mid));
            target.is_none() && skipped.is_none()
        }
        1 if dr == dir => match target {
            Some(p) => p.color != color,
            None => {
                let pawn = ColoredPiece::new(color, Piece::Pawn);
                position.en_passant == Some(to)
                    && en_passant_victim(position, pawn, from, to).is_some()
            }
        },
        _ => false,
    }
}

/// Every square strictly between `from` and `to` is empty. The two squares
/// must share a rank, file or diagonal.
fn is_path_clear(position: &Position, from: Square, to: Square) -> bool {
    let (dr, df) = delta(from, to);
    let (step_r, step_f) = (dr.signum(), df.signum());

    let mut current = from.offset(step_r, step_f);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if position.piece_at(sq).is_some() {
            return false;
        }
        current = sq.offset(step_r, step_f);
    }
    false
}

/// Checks a two-file king move against the castling rules: the king starts
/// on its home square and is not in check, the right is still held, the
/// squares between king and rook are empty, and neither the square the king
/// crosses nor the one it lands on is attacked.
///
/// The rook itself is not looked for; the castling rights are trusted.
pub fn is_legal_castling(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let Some(side) = castle_side(ColoredPiece::new(color, Piece::King), from, to) else {
        return false;
    };
    let rank = color.back_rank();
    if from.rank() != rank || from.file() != 4 {
        return false;
    }

    if !position.castling.has(color, side) {
        return false;
    }

    if is_king_in_check(position, color) {
        return false;
    }

    let blocked = side
        .between_files()
        .iter()
        .any(|&file| position.piece_at_coords(rank as i8, file as i8).is_some());
    if blocked {
        return false;
    }

    let enemy = color.opposite();
    side.king_path_files().iter().all(|&file| {
        Square::from_coords(rank as i8, file as i8)
            .is_some_and(|sq| !is_square_attacked(position, sq, enemy))
    })
}

/// Returns true if any piece of `by_color` attacks `sq`.
pub fn is_square_attacked(position: &Position, sq: Square, by_color: Color) -> bool {
    position
        .pieces()
        .any(|(from, piece)| piece.color == by_color && attacks(position, piece, from, sq))
}

/// Returns true if the king of `color` is attacked.
///
/// A position without that king reports `false`; such positions cannot
/// arise from legal play.
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    match position.find_king(color) {
        Some(king) => is_square_attacked(position, king, color.opposite()),
        None => false,
    }
}

/// Returns true if `color` has at least one legal move, trying every
/// (from, to) pair of its pieces.
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| {
            Square::all().any(|to| is_legal(position, UciMove::new(from, to), false))
        })
}

/// Lists every legal move for the side to move, ordered by source then
/// destination square. Promotions are listed once per promotion piece.
pub fn legal_moves(position: &Position) -> Vec<UciMove> {
    let us = position.side_to_move;
    let mut moves = Vec::new();

    for (from, piece) in position.pieces().filter(|(_, p)| p.color == us) {
        for to in Square::all() {
            if !is_legal(position, UciMove::new(from, to), true) {
                continue;
            }
            if is_promoting(piece, to) {
                moves.extend(
                    Piece::PROMOTIONS
                        .iter()
                        .map(|&promo| UciMove::with_promotion(from, to, promo)),
                );
            } else {
                moves.push(UciMove::new(from, to));
            }
        }
    }

    moves
}
