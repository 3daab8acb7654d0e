//! Ray geometry shared by bishops, rooks and queens.
//!
//! A ray walks outward one square at a time and stops at the first occupied
//! square, which is reported so callers can decide whether it is a capture.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walk from `from` along `direction`, calling `visit` with each empty
/// square. Returns the first occupied square and its piece, if any.
#[inline]
pub fn trace_ray(
    board: &Board,
    from: Square,
    direction: (i8, i8),
    mut visit: impl FnMut(Square),
) -> Option<(Square, Piece)> {
    let (d_row, d_col) = direction;
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if let Some(piece) = board.get(next) {
            return Some((next, piece));
        }
        visit(next);
        current = next;
    }
    None
}

/// First occupant along `direction`, skipping empty squares.
#[inline]
pub fn first_occupant(board: &Board, from: Square, direction: (i8, i8)) -> Option<(Square, Piece)> {
    trace_ray(board, from, direction, |_| {})
}
