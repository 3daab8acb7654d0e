//! Helpers shared by the per-piece generators and the applicator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::trace_ray;

/// Push a move to every target that is empty or holds an enemy piece.
#[inline]
pub fn push_step_moves(
    board: &Board,
    from: Square,
    side: Color,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    for to in targets {
        if board.color_at(to) != Some(side) {
            out.push(Move::new(from, to));
        }
    }
}

/// Push every ray move along `directions`; an enemy occupant ends the ray as a capture.
#[inline]
pub fn push_slider_moves(
    board: &Board,
    from: Square,
    side: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        let blocker = trace_ray(board, from, direction, |to| out.push(Move::new(from, to)));
        if let Some((to, piece)) = blocker {
            if piece.color != side {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// A king moving two files is a castling move.
#[inline]
pub fn is_castling_move(moved: Piece, mv: Move) -> bool {
    moved.kind == PieceKind::King && mv.from.row == mv.to.row && mv.from.col.abs_diff(mv.to.col) == 2
}

/// A pawn moving diagonally onto the recorded en-passant target.
#[inline]
pub fn is_en_passant_move(moved: Piece, mv: Move, en_passant: Option<Square>) -> bool {
    moved.kind == PieceKind::Pawn && mv.from.col != mv.to.col && en_passant == Some(mv.to)
}

/// Piece removed by `mv`, with the square it stood on.
#[inline]
pub fn captured_piece(board: &Board, en_passant: Option<Square>, mv: Move) -> Option<(Square, Piece)> {
    let moved = board.get(mv.from)?;
    if let Some(victim) = board.get(mv.to) {
        return Some((mv.to, victim));
    }
    if is_en_passant_move(moved, mv, en_passant) {
        let passed = Square::new(mv.from.row, mv.to.col);
        return board.get(passed).map(|victim| (passed, victim));
    }
    None
}
