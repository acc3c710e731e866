//! Game tracking with position history.
//!
//! The engine functions are stateless and take the history as an argument.
//! [`Game`] is the convenience wrapper for callers that would rather keep
//! that history in memory: it records every position reached and re-evaluates
//! the status after each move.

use chess_core::{FenError, UciMove};
use thiserror::Error;
use tracing::info;

use crate::apply::apply_move;
use crate::status::game_status;
use crate::{EngineError, GameStatus, Position};

/// Error type for game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move could not be parsed or is not legal.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The game has already ended.
    #[error("game has already ended: {0}")]
    GameAlreadyOver(GameStatus),
}

/// A chess game: its starting position, every position since, and the
/// moves that connect them.
#[derive(Debug, Clone)]
pub struct Game {
    /// Positions before the current one, starting position first.
    history: Vec<Position>,
    current: Position,
    /// Moves played, one per entry of `history`.
    moves: Vec<UciMove>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game from a custom starting position. The status is
    /// evaluated immediately, so a game can start already finished.
    pub fn from_position(position: Position) -> Self {
        let status = game_status(&position, &[]);
        Game {
            history: Vec::new(),
            current: position,
            moves: Vec::new(),
            status,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Returns the current position.
    pub fn position(&self) -> &Position {
        &self.current
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        self.history.first().unwrap_or(&self.current)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Moves played so far.
    pub fn move_history(&self) -> &[UciMove] {
        &self.moves
    }

    /// Number of half-moves played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// FENs of every position before the current one, oldest first; the
    /// history argument [`status_from_fen`](crate::status_from_fen) expects.
    pub fn history_fens(&self) -> Vec<String> {
        self.history.iter().map(Position::to_fen).collect()
    }

    /// Current position as FEN.
    pub fn to_fen(&self) -> String {
        self.position().to_fen()
    }

    /// Plays a move given in UCI notation and returns the new status.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<GameStatus, GameError> {
        let mv = UciMove::parse(uci).map_err(EngineError::from)?;
        self.make_move(mv)
    }

    /// Plays a move and returns the new status.
    pub fn make_move(&mut self, mv: UciMove) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameAlreadyOver(self.status));
        }

        let next = apply_move(&self.current, mv)?;
        self.history.push(std::mem::replace(&mut self.current, next));
        self.moves.push(mv);
        self.status = game_status(&self.current, &self.history);

        if self.status.is_over() {
            info!(ply = self.moves.len(), status = %self.status, "game finished");
        }
        Ok(self.status)
    }
}
