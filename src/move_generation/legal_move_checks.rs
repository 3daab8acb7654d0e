//! Attack and check detection.
//!
//! Attacks are found by looking outward from the target square: a knight
//! jump, king step, pawn diagonal or slider ray that lands on a matching
//! attacker piece means the square is attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::sliding_moves::{first_occupant, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find(Piece::new(color, PieceKind::King))
}

/// True when `color`'s king is attacked. A missing king counts as in check.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return true;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let attacker_pawn = Some(Piece::new(attacker, PieceKind::Pawn));
    if pawn_attack_sources(attacker, square).any(|sq| board.get(sq) == attacker_pawn) {
        return true;
    }

    let attacker_knight = Some(Piece::new(attacker, PieceKind::Knight));
    if knight_targets(square).any(|sq| board.get(sq) == attacker_knight) {
        return true;
    }

    let attacker_king = Some(Piece::new(attacker, PieceKind::King));
    if king_targets(square).any(|sq| board.get(sq) == attacker_king) {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|&direction| {
            matches!(
                first_occupant(board, square, direction),
                Some((_, piece)) if piece.color == attacker
                    && (piece.kind == kind || piece.kind == PieceKind::Queen)
            )
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}
