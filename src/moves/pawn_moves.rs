use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` standing on `square` attacks diagonally.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let forward = color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(forward, d_col))
}

/// Squares from which a pawn of `color` would attack `target`.
#[inline]
pub fn pawn_attack_sources(color: Color, target: Square) -> impl Iterator<Item = Square> {
    let backward = -color.forward();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| target.offset(backward, d_col))
}
