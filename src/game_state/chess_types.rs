//! Core value types shared by the board model, move generation and search.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::{GameState, Position};
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance (white moves toward row 0).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Uppercase piece letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Kinds a pawn may promote to, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A colored piece occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Single-character exchange code: uppercase white, lowercase black.
    #[inline]
    pub const fn code(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        let Some(kind) = PieceKind::from_letter(code) else {
            return None;
        };
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }
}

/// Board coordinate: row 0 is rank 8, row 7 is rank 1; col 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Checked construction from signed coordinates, `None` when off-board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Dense `0..64` index, row-major.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A move in exchange form: source, destination and optional promotion kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

/// Four independent castling flags. Rights are only ever revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: Self = Self {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    /// 4-bit mask, used as a hashing index.
    #[inline]
    pub const fn bits(self) -> usize {
        (self.white_kingside as usize)
            | (self.white_queenside as usize) << 1
            | (self.black_kingside as usize) << 2
            | (self.black_queenside as usize) << 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_follow_case_convention() {
        let white_knight = Piece::from_code('N').expect("N is a piece code");
        assert_eq!(white_knight, Piece::new(Color::White, PieceKind::Knight));
        let black_queen = Piece::from_code('q').expect("q is a piece code");
        assert_eq!(black_queen.code(), 'q');
        assert!(Piece::from_code('.').is_none());
        assert!(Piece::from_code('x').is_none());
    }

    #[test]
    fn square_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert!(!Square::new(8, 0).is_on_board());
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn castling_bits_are_distinct_per_flag() {
        let mut rights = CastlingRights::ALL;
        assert_eq!(rights.bits(), 0b1111);
        rights.revoke_queenside(Color::Black);
        assert_eq!(rights.bits(), 0b0111);
        rights.revoke_kingside(Color::White);
        assert_eq!(rights.bits(), 0b0110);
        assert_eq!(CastlingRights::NONE.bits(), 0);
    }
}
