use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    push_step_moves(
        &position.board,
        from,
        position.side_to_move(),
        knight_targets(from),
        out,
    );
}
