//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation, then applies each candidate
//! in place and discards those that leave the mover's king attacked. Castling
//! is also discarded when the king starts on or passes through an attacked
//! square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_unchecked, unmake_move_in_place};
use crate::move_generation::legal_move_checks::{is_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::is_castling_move;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Geometry-only moves for the side to move; may leave the own king in check.
pub fn pseudo_legal_moves(board: &Board, state: &GameState) -> Vec<Move> {
    let position = Position::new(*board, *state);
    let mut out = Vec::with_capacity(64);
    generate_pseudo_legal_into(&position, &mut out);
    out
}

/// Moves for the side to move that do not leave its own king in check.
pub fn legal_moves(board: &Board, state: &GameState) -> Vec<Move> {
    let mut scratch = Position::new(*board, *state);
    legal_moves_in_place(&mut scratch)
}

pub(crate) fn generate_pseudo_legal_into(position: &Position, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    for (from, piece) in position.board.pieces_of(side) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(position, from, out),
            PieceKind::Knight => generate_knight_moves(position, from, out),
            PieceKind::Bishop => generate_bishop_moves(position, from, out),
            PieceKind::Rook => generate_rook_moves(position, from, out),
            PieceKind::Queen => generate_queen_moves(position, from, out),
            PieceKind::King => generate_king_moves(position, from, out),
        }
    }
}

/// Legal moves of `position`; the position is restored before returning.
pub(crate) fn legal_moves_in_place(position: &mut Position) -> Vec<Move> {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_into(position, &mut pseudo);

    let side = position.side_to_move();
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if is_castling_move_on(position, mv) && !castling_path_is_safe(&position.board, mv, side) {
            continue;
        }

        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        let leaves_king_attacked = is_in_check(&position.board, side);
        unmake_move_in_place(position, undo);

        if !leaves_king_attacked {
            legal.push(mv);
        }
    }
    legal
}

#[inline]
fn is_castling_move_on(position: &Position, mv: Move) -> bool {
    position
        .board
        .get(mv.from)
        .is_some_and(|piece| is_castling_move(piece, mv))
}

/// The king may not castle out of check or across an attacked square.
fn castling_path_is_safe(board: &Board, mv: Move, side: Color) -> bool {
    let enemy = side.opposite();
    let transit_col = (mv.from.col + mv.to.col) / 2;
    !is_square_attacked(board, mv.from, enemy)
        && !is_square_attacked(board, Square::new(mv.from.row, transit_col), enemy)
}
