//! Chess position representation.

use std::fmt;
use std::str::FromStr;

use chess_core::{format_placement, Board, Color, ColoredPiece, FenError, FenRecord, Piece, Square};

/// The two wings a king can castle towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File the rook starts on (h or a).
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File the rook lands on (f or d).
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Files strictly between king and rook; all must be empty to castle.
    #[inline]
    pub const fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Files the king crosses and lands on; none may be attacked.
    #[inline]
    pub const fn king_path_files(self) -> [u8; 2] {
        match self {
            CastleSide::Kingside => [5, 6],
            CastleSide::Queenside => [3, 2],
        }
    }

    /// The side a rook's home corner belongs to, if `sq` is one.
    pub fn from_rook_home(sq: Square) -> Option<(Color, CastleSide)> {
        match sq {
            Square::H1 => Some((Color::White, CastleSide::Kingside)),
            Square::A1 => Some((Color::White, CastleSide::Queenside)),
            Square::H8 => Some((Color::Black, CastleSide::Kingside)),
            Square::A8 => Some((Color::Black, CastleSide::Queenside)),
            _ => None,
        }
    }
}

/// Castling availability, one bit per (color, side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => 0b0001,
            (Color::White, CastleSide::Queenside) => 0b0010,
            (Color::Black, CastleSide::Kingside) => 0b0100,
            (Color::Black, CastleSide::Queenside) => 0b1000,
        }
    }

    /// Returns true if `color` may still castle towards `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::flag(color, side);
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Removes both rights of a color (its king moved).
    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastleSide::Kingside);
        self.revoke(color, CastleSide::Queenside);
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Swaps White's rights with Black's.
    pub const fn mirrored(self) -> Self {
        CastlingRights(((self.0 & 0b0011) << 2) | ((self.0 & 0b1100) >> 2))
    }

    /// Reads an already validated FEN castling field (`"KQkq"`, `"-"`).
    fn from_fen_field(field: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::Kingside),
                'Q' => rights.grant(Color::White, CastleSide::Queenside),
                'k' => rights.grant(Color::Black, CastleSide::Kingside),
                'q' => rights.grant(Color::Black, CastleSide::Queenside),
                _ => {}
            }
        }
        rights
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Complete chess position state.
///
/// Positions are plain values. Anything that needs to try a move out
/// clones the position first, so a `&Position` handed to the engine is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Board cells indexed `[rank][file]`, rank 0 being rank "1".
    pub squares: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// Square a pawn may capture onto en passant this move, if any.
    pub en_passant: Option<Square>,

    /// Half-moves since the last pawn move or capture.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Position {
    /// Creates an empty board with White to move.
    pub fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_record(FenRecord::default())
    }

    /// Creates a position from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        FenRecord::parse(fen).map(Self::from_record)
    }

    fn from_record(record: FenRecord) -> Self {
        Position {
            squares: record.board,
            side_to_move: record.side_to_move,
            castling: CastlingRights::from_fen_field(&record.castling),
            en_passant: record.en_passant,
            halfmove_clock: record.halfmove_clock,
            fullmove_number: record.fullmove_number,
        }
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        FenRecord {
            board: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling.to_string(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_fen()
    }

    /// Hands the move to the other side. The fullmove number grows when
    /// the turn comes back to White; it stops at `u32::MAX`.
    pub fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Color::White {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// Advances the turn and serializes the result. This is the last step of
    /// [`apply_uci`](crate::apply_uci).
    pub fn to_fen_advancing_turn(&mut self) -> String {
        self.advance_turn();
        self.to_fen()
    }

    /// The fields that decide whether two positions repeat: placement, side
    /// to move, castling rights and en passant target. Clocks are left out.
    pub fn repetition_key(&self) -> String {
        format!(
            "{} {} {} {}",
            format_placement(&self.squares),
            self.side_to_move.to_fen_char(),
            self.castling,
            self.en_passant
                .map_or_else(|| "-".to_string(), |sq| sq.to_algebraic())
        )
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Like [`piece_at`](Self::piece_at) but by raw coordinates; off-board
    /// coordinates read as empty.
    pub fn piece_at_coords(&self, rank: i8, file: i8) -> Option<ColoredPiece> {
        Square::from_coords(rank, file).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<ColoredPiece>) {
        self.squares[sq.rank() as usize][sq.file() as usize] = piece;
    }

    /// Removes and returns whatever stands on `sq`.
    #[inline]
    pub fn take_piece(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Iterates over occupied squares from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Finds the king of the given color.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(color, Piece::King);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Moves the rook that accompanies a castling king on `rank`.
    pub fn relocate_castling_rook(&mut self, rank: u8, side: CastleSide) {
        let squares = (
            Square::from_coords(rank as i8, side.rook_file() as i8),
            Square::from_coords(rank as i8, side.rook_target_file() as i8),
        );
        if let (Some(from), Some(to)) = squares {
            let rook = self.take_piece(from);
            self.set_piece(to, rook);
        }
    }

    /// The color-reversed twin of this position: ranks flipped, piece colors
    /// swapped, and every side-dependent field mirrored to match.
    pub fn mirrored(&self) -> Self {
        let mut mirror = Position::empty();
        for (sq, piece) in self.pieces() {
            mirror.set_piece(sq.flip_rank(), Some(piece.flipped()));
        }
        mirror.side_to_move = self.side_to_move.opposite();
        mirror.castling = self.castling.mirrored();
        mirror.en_passant = self.en_passant.map(Square::flip_rank);
        mirror.halfmove_clock = self.halfmove_clock;
        mirror.fullmove_number = self.fullmove_number;
        mirror
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
