//! The piece catalog: six piece kinds and the twelve colored identities.

use crate::Color;

/// The six kinds of chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// Pieces a pawn may promote to, in the order moves are listed.
    pub const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

    /// Returns the lowercase letter for this kind (`p n b r q k`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Parses a promotion letter from a UCI move. Case-insensitive.
    pub const fn from_promotion_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'q' => Some(Piece::Queen),
            'r' => Some(Piece::Rook),
            'b' => Some(Piece::Bishop),
            'n' => Some(Piece::Knight),
            _ => None,
        }
    }

    /// Bishops and knights.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Knight)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// One of the twelve piece identities: a kind owned by a color.
///
/// Serialized as a single FEN letter, uppercase for White and lowercase
/// for Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    /// The full catalog, White pieces first.
    pub const ALL: [ColoredPiece; 12] = [
        ColoredPiece::new(Color::White, Piece::Pawn),
        ColoredPiece::new(Color::White, Piece::Rook),
        ColoredPiece::new(Color::White, Piece::Knight),
        ColoredPiece::new(Color::White, Piece::Bishop),
        ColoredPiece::new(Color::White, Piece::Queen),
        ColoredPiece::new(Color::White, Piece::King),
        ColoredPiece::new(Color::Black, Piece::Pawn),
        ColoredPiece::new(Color::Black, Piece::Rook),
        ColoredPiece::new(Color::Black, Piece::Knight),
        ColoredPiece::new(Color::Black, Piece::Bishop),
        ColoredPiece::new(Color::Black, Piece::Queen),
        ColoredPiece::new(Color::Black, Piece::King),
    ];

    #[inline]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    /// Returns the FEN letter for this identity.
    pub const fn to_fen_char(self) -> char {
        let c = self.piece.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a FEN letter into a piece identity.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some(ColoredPiece { color, piece })
    }

    /// Same kind, other color.
    #[inline]
    pub const fn flipped(self) -> Self {
        ColoredPiece::new(self.color.opposite(), self.piece)
    }
}

impl std::fmt::Display for ColoredPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_letters_roundtrip() {
        for cp in ColoredPiece::ALL {
            assert_eq!(ColoredPiece::from_fen_char(cp.to_fen_char()), Some(cp));
        }
        let letters: String = ColoredPiece::ALL.iter().map(|p| p.to_fen_char()).collect();
        assert_eq!(letters, "PRNBQKprnbqk");
    }

    #[test]
    fn from_fen_char() {
        assert_eq!(
            ColoredPiece::from_fen_char('N'),
            Some(ColoredPiece::new(Color::White, Piece::Knight))
        );
        assert_eq!(
            ColoredPiece::from_fen_char('q'),
            Some(ColoredPiece::new(Color::Black, Piece::Queen))
        );
        assert_eq!(ColoredPiece::from_fen_char('x'), None);
        assert_eq!(ColoredPiece::from_fen_char('1'), None);
    }

    #[test]
    fn promotion_letters() {
        assert_eq!(Piece::from_promotion_char('q'), Some(Piece::Queen));
        assert_eq!(Piece::from_promotion_char('N'), Some(Piece::Knight));
        assert_eq!(Piece::from_promotion_char('k'), None);
        assert_eq!(Piece::from_promotion_char('p'), None);
    }

    #[test]
    fn minor_and_slider() {
        assert!(Piece::Bishop.is_minor());
        assert!(Piece::Knight.is_minor());
        assert!(!Piece::Rook.is_minor());
    }

    #[test]
    fn flipped() {
        let wk = ColoredPiece::new(Color::White, Piece::King);
        assert_eq!(wk.flipped().to_fen_char(), 'k');
    }
}
