//! Move application.
//!
//! `apply_move` is the copy-returning boundary form: it validates the move,
//! then returns a new board and state, leaving the inputs untouched. Search
//! and legality filtering use the in-place make/unmake pair instead.

use crate::errors::{EngineError, EngineResult, InvalidMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::pseudo_legal_moves;
use crate::move_generation::legal_move_shared::{is_castling_move, is_en_passant_move};

/// Apply `mv` to copies of `board` and `state`.
pub fn apply_move(board: &Board, mv: Move, state: &GameState) -> EngineResult<(Board, GameState)> {
    let mut position = Position::new(*board, *state);
    make_move_in_place(&mut position, mv)?;
    Ok((position.board, position.state))
}

/// Validate `mv` and apply it to `position`, returning the undo record.
/// On error `position` is left unmodified.
pub fn make_move_in_place(position: &mut Position, mv: Move) -> EngineResult<UndoState> {
    validate_move(position, mv)?;
    make_move_unchecked(position, mv).ok_or(EngineError::InvalidMove {
        mv,
        reason: InvalidMoveReason::EmptySource,
    })
}

/// Reverse a move previously applied with the matching undo record.
pub fn unmake_move_in_place(position: &mut Position, undo: UndoState) {
    let board = &mut position.board;
    let mv = undo.mv;

    board.set(mv.to, None);
    if let Some((rook_from, rook_to)) = undo.rook_move {
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }
    if let Some((square, piece)) = undo.captured {
        board.set(square, Some(piece));
    }
    board.set(mv.from, Some(undo.moved_piece));

    position.state.castling_rights = undo.prev_castling_rights;
    position.state.en_passant = undo.prev_en_passant;
    position.state.side_to_move = undo.moved_piece.color;
}

/// Apply a move known to come from the generator. No validation beyond
/// occupancy: an empty source square leaves `position` untouched and
/// returns `None`.
pub(crate) fn make_move_unchecked(position: &mut Position, mv: Move) -> Option<UndoState> {
    let state = position.state;
    let board = &mut position.board;

    debug_assert!(board.get(mv.from).is_some(), "no piece on the source square of {mv}");
    let moved_piece = board.take(mv.from)?;
    let side = moved_piece.color;

    let mut rook_move = None;
    if is_castling_move(moved_piece, mv) {
        let row = mv.from.row;
        let (rook_from, rook_to) = if mv.to.col > mv.from.col {
            (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TO_COL)
        } else {
            (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TO_COL)
        };
        let rook_from = Square::new(row, rook_from);
        let rook_to = Square::new(row, rook_to);
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
        rook_move = Some((rook_from, rook_to));
    }

    let mut captured = board.get(mv.to).map(|piece| (mv.to, piece));
    if is_en_passant_move(moved_piece, mv, state.en_passant) {
        // The passed pawn sits one row behind the destination.
        let passed = Square::new(mv.from.row, mv.to.col);
        captured = board.take(passed).map(|piece| (passed, piece));
    }

    let placed = match mv.promotion {
        Some(kind) => Piece::new(side, kind),
        None => moved_piece,
    };
    board.set(mv.to, Some(placed));

    let next_state = &mut position.state;
    next_state.en_passant = if moved_piece.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2 {
        Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
    } else {
        None
    };
    update_castling_rights(&mut next_state.castling_rights, moved_piece, mv.from);
    next_state.side_to_move = side.opposite();

    Some(UndoState {
        mv,
        moved_piece,
        captured,
        rook_move,
        prev_castling_rights: state.castling_rights,
        prev_en_passant: state.en_passant,
    })
}

/// Rights are lost when a king or rook leaves its original square. A rook
/// captured in place keeps its side's right; castling generation checks the
/// rook is still on its corner.
fn update_castling_rights(rights: &mut CastlingRights, moved: Piece, from: Square) {
    let side = moved.color;
    match moved.kind {
        PieceKind::King if from == king_home(side) => {
            rights.revoke_kingside(side);
            rights.revoke_queenside(side);
        }
        PieceKind::Rook if from == kingside_rook_home(side) => rights.revoke_kingside(side),
        PieceKind::Rook if from == queenside_rook_home(side) => rights.revoke_queenside(side),
        _ => {}
    }
}

fn validate_move(position: &Position, mv: Move) -> EngineResult<()> {
    let invalid = |reason| Err(EngineError::InvalidMove { mv, reason });

    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return invalid(InvalidMoveReason::OutOfRange);
    }
    if mv.from == mv.to {
        return invalid(InvalidMoveReason::NullMove);
    }
    let Some(moved) = position.board.get(mv.from) else {
        return invalid(InvalidMoveReason::EmptySource);
    };
    if moved.color != position.side_to_move() {
        return invalid(InvalidMoveReason::WrongSide);
    }
    if position.board.color_at(mv.to) == Some(moved.color) {
        return invalid(InvalidMoveReason::OwnPieceCaptured);
    }

    let promotes = moved.kind == PieceKind::Pawn && mv.to.row == moved.color.promotion_row();
    let promotion_ok = match mv.promotion {
        None => !promotes,
        Some(kind) => promotes && PROMOTION_KINDS.contains(&kind),
    };
    if !promotion_ok {
        return invalid(InvalidMoveReason::BadPromotion);
    }

    if !pseudo_legal_moves(&position.board, &position.state).contains(&mv) {
        return invalid(InvalidMoveReason::NotAPieceMove);
    }
    Ok(())
}
