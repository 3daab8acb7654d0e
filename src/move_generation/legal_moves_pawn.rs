use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    let board = &position.board;
    let side = position.side_to_move();
    let forward = side.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            push_pawn_move(side, from, one_step, out);

            if from.row == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if board.color_at(to) == Some(side.opposite()) {
            push_pawn_move(side, from, to, out);
        }
    }

    generate_en_passant(position, from, out);
}

/// En passant: the pawn sits on the row next to the target and one file away,
/// with the passed enemy pawn beside it.
fn generate_en_passant(position: &Position, from: Square, out: &mut Vec<Move>) {
    let Some(target) = position.state.en_passant else {
        return;
    };
    let side = position.side_to_move();
    if from.offset(side.forward(), 0).map(|sq| sq.row) != Some(target.row)
        || from.col.abs_diff(target.col) != 1
    {
        return;
    }
    let passed = Square::new(from.row, target.col);
    let enemy_pawn = Piece::new(side.opposite(), PieceKind::Pawn);
    if position.board.get(passed) == Some(enemy_pawn) && position.board.is_empty(target) {
        out.push(Move::new(from, target));
    }
}

/// Plain move, or the four promotion variants on the farthest row.
#[inline]
fn push_pawn_move(side: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    if to.row == side.promotion_row() {
        for promotion in PROMOTION_KINDS {
            out.push(Move::with_promotion(from, to, promotion));
        }
    } else {
        out.push(Move::new(from, to));
    }
}
