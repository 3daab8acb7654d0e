//! Knight jump geometry.

use crate::game_state::chess_types::Square;

/// The eight (row, col) jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `square` reaches, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_row, d_col)| square.offset(d_row, d_col))
}
