use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::sliding_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_slider_moves(
        &position.board,
        from,
        position.side_to_move(),
        &ROOK_DIRECTIONS,
        out,
    );
}
