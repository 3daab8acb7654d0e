use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(position: &Position, from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    push_step_moves(&position.board, from, side, king_targets(from), out);
    generate_castling_moves(position, from, out);
}

/// Two-file king moves. Only rights, piece placement and empty squares
/// between king and rook are examined here; attacked squares are rejected by
/// the legality filter.
fn generate_castling_moves(position: &Position, king_from: Square, out: &mut Vec<Move>) {
    let side = position.side_to_move();
    if king_from != king_home(side) {
        return;
    }

    let board = &position.board;
    let rights = position.state.castling_rights;
    let row = side.home_row();
    let own_rook = Some(Piece::new(side, PieceKind::Rook));

    if rights.kingside(side)
        && board.get(kingside_rook_home(side)) == own_rook
        && (KING_HOME_COL + 1..KINGSIDE_ROOK_COL).all(|col| board.is_empty(Square::new(row, col)))
    {
        out.push(Move::new(king_from, Square::new(row, KINGSIDE_KING_TO_COL)));
    }

    if rights.queenside(side)
        && board.get(queenside_rook_home(side)) == own_rook
        && (QUEENSIDE_ROOK_COL + 1..KING_HOME_COL).all(|col| board.is_empty(Square::new(row, col)))
    {
        out.push(Move::new(king_from, Square::new(row, QUEENSIDE_KING_TO_COL)));
    }
}
