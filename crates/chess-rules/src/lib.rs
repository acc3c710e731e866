//! Stateless chess rules engine over FEN positions.
//!
//! This crate provides:
//! - [`Position`] - mailbox board plus side to move, castling rights,
//!   en passant target and move counters, parsed from and written back to FEN
//! - [`legality`] - move legality, attack detection and legal move listing
//! - [`apply_move`] - plays a legal move and returns the next position
//! - [`game_status`] - checkmate, stalemate and the draw rules
//! - [`RuleSet`] / [`StandardChess`] - the rules behind one trait
//! - [`Game`] - optional in-memory history tracking
//! - [`perft`] - leaf counting for validating the rules
//!
//! Every function is pure: inputs are borrowed, results are new values, and
//! nothing is cached between calls. Callers that need durable games store
//! FENs and pass the history back in.
//!
//! # Example
//!
//! ```
//! use chess_rules::{apply_uci, status_from_fen, GameStatus};
//!
//! let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let next = apply_uci(start, "e2e4").unwrap();
//! assert_eq!(next, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
//! assert_eq!(status_from_fen(&next, &[start]).unwrap(), GameStatus::InProgress);
//! ```

mod apply;
mod error;
mod game;
pub mod legality;
mod perft;
mod position;
pub mod rules;
mod status;

pub use apply::{apply_move, apply_uci};
pub use error::EngineError;
pub use game::{Game, GameError};
pub use legality::{
    has_any_legal_move, is_king_in_check, is_legal, is_legal_castling, is_square_attacked,
    legal_moves,
};
pub use perft::{perft, perft_divide};
pub use position::{CastleSide, CastlingRights, Position};
pub use rules::{RuleSet, StandardChess};
pub use status::{
    game_status, is_insufficient_material, repetition_count, status_from_fen, DrawReason,
    GameStatus, FIFTY_MOVE_HALFMOVES, REPETITION_LIMIT,
};

pub use chess_core::{Color, ColoredPiece, FenError, MoveParseError, Piece, Square, UciMove};
