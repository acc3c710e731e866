//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine:
//! - [`Color`], [`Piece`] and the twelve [`ColoredPiece`] identities
//! - [`Square`] for board coordinates
//! - [`UciMove`] for moves received in UCI notation
//! - [`FenRecord`] for FEN parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{format_placement, parse_placement, Board, FenError, FenRecord};
pub use mov::{MoveParseError, UciMove};
pub use piece::{ColoredPiece, Piece};
pub use square::Square;
