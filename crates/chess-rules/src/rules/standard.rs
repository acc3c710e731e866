//! Standard chess rules.

use super::RuleSet;
use crate::{apply, legality, status, GameStatus, Position};
use chess_core::UciMove;

/// Standard chess rules (FIDE movement, castling, en passant, promotion)
/// with checkmate, stalemate, insufficient material, fifty-move and
/// threefold-repetition endings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn initial_position(&self) -> Position {
        Position::startpos()
    }

    fn is_legal(&self, position: &Position, mv: UciMove) -> bool {
        legality::is_legal(position, mv, true)
    }

    fn apply(&self, position: &Position, mv: UciMove) -> Option<Position> {
        apply::apply_move(position, mv).ok()
    }

    fn legal_moves(&self, position: &Position) -> Vec<UciMove> {
        legality::legal_moves(position)
    }

    fn is_check(&self, position: &Position) -> bool {
        legality::is_king_in_check(position, position.side_to_move)
    }

    fn status(&self, position: &Position, history: &[Position]) -> GameStatus {
        status::game_status(position, history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::FenRecord;

    #[test]
    fn initial_position() {
        let pos = StandardChess.initial_position();
        assert_eq!(pos.to_fen(), FenRecord::STARTPOS);
        assert_eq!(StandardChess.legal_moves(&pos).len(), 20);
        assert!(!StandardChess.is_check(&pos));
    }

    #[test]
    fn try_apply_rejects_illegal_moves() {
        let pos = StandardChess.initial_position();
        assert!(StandardChess
            .try_apply(&pos, UciMove::parse("e2e5").unwrap())
            .is_none());
        assert!(StandardChess
            .try_apply(&pos, UciMove::parse("g1f3").unwrap())
            .is_some());
    }

    #[test]
    fn game_over_after_mate() {
        let pos =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(StandardChess.is_check(&pos));
        assert!(StandardChess.is_game_over(&pos, &[]));
        assert!(StandardChess.legal_moves(&pos).is_empty());
    }
}
