use crate::game_state::chess_types::*;

/// Single undo record for `make_move_in_place` / `unmake_move_in_place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `mv.to` for en passant).
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation performed by a castling move.
    pub rook_move: Option<(Square, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant: Option<Square>,
}
