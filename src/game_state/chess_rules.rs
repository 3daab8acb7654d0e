//! Canonical chess-rule constants.
//!
//! Starting arrangement and the home squares that castling depends on.

use crate::game_state::chess_types::{Color, Square};

/// Standard starting position in the row exchange format, row 0 first.
pub const STARTING_ROWS: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
];

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// King destination / rook destination columns when castling.
pub const KINGSIDE_KING_TO_COL: u8 = 6;
pub const KINGSIDE_ROOK_TO_COL: u8 = 5;
pub const QUEENSIDE_KING_TO_COL: u8 = 2;
pub const QUEENSIDE_ROOK_TO_COL: u8 = 3;

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(color.home_row(), KING_HOME_COL)
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new(color.home_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new(color.home_row(), QUEENSIDE_ROOK_COL)
}
