//! Mailbox board model.
//!
//! The board is a plain 8×8 grid of optional pieces. Row 0 is black's back
//! rank (rank 8) and row 7 is white's back rank (rank 1). The exchange format
//! is a grid of single-character piece codes with `.` marking an empty cell.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::STARTING_ROWS;
use crate::game_state::chess_types::{Color, Piece, Square};

/// Empty-cell marker in the character exchange format.
pub const EMPTY_CODE: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard chess starting arrangement.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (row, line) in STARTING_ROWS.iter().enumerate() {
            for (col, code) in line.chars().enumerate() {
                board.cells[row][col] = Piece::from_code(code);
            }
        }
        board
    }

    /// Build a board from the character grid exchange format.
    pub fn from_codes(codes: [[char; 8]; 8]) -> EngineResult<Self> {
        let mut board = Self::empty();
        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                board.cells[row][col] = parse_cell(code)?;
            }
        }
        Ok(board)
    }

    /// Build a board from eight strings of eight codes each, row 0 first.
    pub fn from_rows(rows: &[&str]) -> EngineResult<Self> {
        if rows.len() != 8 {
            return Err(EngineError::MalformedBoard(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let count = line.chars().count();
            if count != 8 {
                return Err(EngineError::MalformedBoard(format!(
                    "row {row} has {count} cells, expected 8"
                )));
            }
            for (col, code) in line.chars().enumerate() {
                board.cells[row][col] = parse_cell(code)?;
            }
        }
        Ok(board)
    }

    pub fn to_codes(&self) -> [[char; 8]; 8] {
        let mut codes = [[EMPTY_CODE; 8]; 8];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                if let Some(piece) = cell {
                    codes[row][col] = piece.code();
                }
            }
        }
        codes
    }

    /// Piece on `square`; off-board squares read as empty.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.cells[square.row as usize][square.col as usize]
    }

    /// Store `piece` on `square`. Callers guarantee `square` is on the board.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Color of the occupant of `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find(&self, piece: Piece) -> Option<Square> {
        self.pieces()
            .find(|(_, occupant)| *occupant == piece)
            .map(|(sq, _)| sq)
    }
}

fn parse_cell(code: char) -> EngineResult<Option<Piece>> {
    if code == EMPTY_CODE {
        return Ok(None);
    }
    Piece::from_code(code)
        .map(Some)
        .ok_or(EngineError::InvalidPieceCode(code))
}
