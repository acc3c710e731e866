//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{Color, ColoredPiece, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// Piece placement indexed `[rank][file]`, rank 0 being rank "1".
pub type Board = [[Option<ColoredPiece>; 8]; 8];

/// The six fields of a FEN string, each validated.
///
/// Castling availability stays in its textual form (`"KQkq"`, `"-"`); the
/// rules engine owns the rights representation and converts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenRecord {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: String,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenRecord {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let board = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parts[2];
        validate_castling(castling)?;

        let en_passant = parse_en_passant(parts[3], side_to_move)?;

        let halfmove_clock = parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;

        let fullmove_number = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(FenRecord {
            board,
            side_to_move,
            castling: castling.to_string(),
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Converts the record back to a FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            format_placement(&self.board),
            self.side_to_move.to_fen_char(),
            self.castling,
            self.en_passant
                .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic()),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

/// Parses the placement field. Every rank must describe exactly 8 squares.
pub fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut board: Board = [[None; 8]; 8];
    for (i, row) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0usize;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as usize;
            } else if let Some(piece) = ColoredPiece::from_fen_char(c) {
                if file < 8 {
                    board[rank][file] = Some(piece);
                }
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    rank + 1
                )));
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank + 1,
                file
            )));
        }
    }

    Ok(board)
}

/// Formats a board as a FEN placement field, collapsing empty runs to digits.
pub fn format_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for rank in (0..8).rev() {
        let mut empty = 0;
        for cell in &board[rank] {
            match cell {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

fn validate_castling(castling: &str) -> Result<(), FenError> {
    if castling == "-" {
        return Ok(());
    }

    let mut seen = String::new();
    for c in castling.chars() {
        if !"KQkq".contains(c) {
            return Err(FenError::InvalidCastlingRights(format!(
                "invalid character '{}'",
                c
            )));
        }
        if seen.contains(c) {
            return Err(FenError::InvalidCastlingRights(format!(
                "duplicate flag '{}'",
                c
            )));
        }
        seen.push(c);
    }

    Ok(())
}

/// The target sits behind a pawn the opponent just pushed two squares, so it
/// is on rank 6 when White is to move and rank 3 when Black is.
fn parse_en_passant(ep: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if ep == "-" {
        return Ok(None);
    }

    let expected_rank = match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    };
    match Square::from_algebraic(ep) {
        Some(sq) if sq.rank() == expected_rank => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassantSquare(ep.to_string())),
    }
}

impl Default for FenRecord {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
