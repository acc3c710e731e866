//! Board square representation.

use std::fmt;

/// A square on the board, addressed by rank and file indices in `0..8`.
///
/// Rank 0 is White's back rank ("1"), file 0 is the a-file. Internally the
/// square is stored as `rank * 8 + file`, so a1 = 0 and h8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

impl Square {
    /// Creates a square from rank and file indices, or `None` when either is
    /// off the board.
    #[inline]
    pub const fn from_coords(rank: i8, file: i8) -> Option<Self> {
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank as u8) * 8 + file as u8))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0];
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Self::from_coords((rank - b'1') as i8, (file - b'a') as i8)
    }

    /// Iterates all 64 squares from a1 to h8, rank by rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rank index, 0 for rank "1".
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// File index, 0 for the a-file.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// The square `dr` ranks and `df` files away, if it is on the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Self> {
        Self::from_coords(self.rank() as i8 + dr, self.file() as i8 + df)
    }

    /// Reflects the square across the horizontal mid-line (e2 <-> e7).
    #[inline]
    pub const fn flip_rank(self) -> Self {
        Square((7 - self.rank()) * 8 + self.file())
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}", self)
    }

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file()) as char,
            (b'1' + self.rank()) as char
        )
    }
}
