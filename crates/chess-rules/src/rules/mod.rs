//! Rule set abstraction.
//!
//! [`RuleSet`] is the seam between callers and the rules of the game being
//! played. [`StandardChess`] is the only implementation; callers that hold a
//! rule set generically can be handed a different one without changes.

mod standard;

pub use standard::StandardChess;

use crate::{GameStatus, Position};
use chess_core::UciMove;

/// The operations a game needs from its rules.
///
/// # Example
///
/// ```
/// use chess_core::UciMove;
/// use chess_rules::rules::RuleSet;
/// use chess_rules::{GameStatus, StandardChess};
///
/// let start = StandardChess.initial_position();
/// let e4 = UciMove::parse("e2e4").unwrap();
/// let next = StandardChess.try_apply(&start, e4).unwrap();
/// assert_eq!(StandardChess.status(&next, &[start]), GameStatus::InProgress);
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> Position;

    /// Returns true if `mv` is legal for the side to move.
    fn is_legal(&self, position: &Position, mv: UciMove) -> bool;

    /// Plays a legal move, returning `None` when it is illegal.
    fn apply(&self, position: &Position, mv: UciMove) -> Option<Position>;

    /// All legal moves for the side to move.
    fn legal_moves(&self, position: &Position) -> Vec<UciMove>;

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Position) -> bool;

    /// Status of `position` given the positions that led to it.
    fn status(&self, position: &Position, history: &[Position]) -> GameStatus;

    /// Plays `mv` if it is legal.
    fn try_apply(&self, position: &Position, mv: UciMove) -> Option<Position> {
        if self.is_legal(position, mv) {
            self.apply(position, mv)
        } else {
            None
        }
    }

    /// Returns true if the game is over in `position`.
    fn is_game_over(&self, position: &Position, history: &[Position]) -> bool {
        self.status(position, history).is_over()
    }
}
