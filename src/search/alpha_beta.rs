//! Negamax game-tree search: alpha-beta, principal variation search and
//! quiescence, plus an unpruned reference minimax.
//!
//! Scores are relative to the side to move. A side that is checkmated at ply
//! `p` scores `-(MATE_SCORE - p)`, so shorter mates rank higher. Mate scores
//! are stored in the transposition table relative to the storing node and
//! converted back on probe.

use std::cmp::Reverse;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_unchecked, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves_in_place;
use crate::move_generation::legal_move_shared::captured_piece;
use crate::search::board_scoring::{piece_value, BoardScorer, MATE_SCORE};
use crate::search::search_context::SearchContext;
use crate::search::transposition_table::{Bound, TTEntry};
use crate::search::zobrist::position_key;

/// Hard bound on quiescence recursion below the nominal horizon.
pub const QUIESCENCE_MAX_PLY: u8 = 6;
/// Window bound strictly outside every reachable score.
pub const SCORE_INFINITY: i32 = MATE_SCORE + 1;

const MATE_TT_THRESHOLD: i32 = MATE_SCORE - 1000;

const TT_MOVE_ORDER: i32 = 1_000_000;
const CAPTURE_ORDER: i32 = 200_000;
const PROMOTION_ORDER: i32 = 150_000;
const KILLER_ORDER: i32 = 100_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchAlgorithm {
    AlphaBeta,
    #[default]
    PrincipalVariation,
}

/// Search the root to `depth` plies and return the best move with its score.
/// With no legal moves the move is `None` and the score is the terminal score.
pub fn search_root<S: BoardScorer + ?Sized>(
    position: &mut Position,
    scorer: &S,
    depth: u8,
    algorithm: SearchAlgorithm,
    ctx: &mut SearchContext,
) -> (Option<Move>, i32) {
    ctx.nodes += 1;
    let key = position_key(position);

    let mut moves = legal_moves_in_place(position);
    if moves.is_empty() {
        return (None, terminal_score(position, 0));
    }
    if depth == 0 {
        return (None, quiescence(position, scorer, -SCORE_INFINITY, SCORE_INFINITY, 0, 0, &mut ctx.nodes));
    }

    let tt_move = ctx.tt.probe(key).and_then(|entry| entry.best_move);
    order_moves(position, &mut moves, tt_move, ctx.killer_at(depth), ctx);

    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;

    for (move_index, mv) in moves.into_iter().enumerate() {
        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        let score = search_child(position, scorer, depth, alpha, beta, 1, move_index, algorithm, ctx);
        unmake_move_in_place(position, undo);

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    ctx.tt.store(TTEntry {
        key,
        depth,
        score: tt_score_for_storage(best_score, 0),
        bound: Bound::Exact,
        best_move,
    });

    (best_move, best_score)
}

/// Fail-soft negamax over legal moves with transposition caching.
#[allow(clippy::too_many_arguments)]
pub fn negamax<S: BoardScorer + ?Sized>(
    position: &mut Position,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    algorithm: SearchAlgorithm,
    ctx: &mut SearchContext,
) -> i32 {
    if depth == 0 {
        return quiescence(position, scorer, alpha, beta, ply, 0, &mut ctx.nodes);
    }

    ctx.nodes += 1;
    let alpha_orig = alpha;
    let key = position_key(position);

    let mut tt_move = None;
    if let Some(entry) = ctx.tt.probe(key) {
        tt_move = entry.best_move;
        if entry.depth >= depth {
            let tt_score = tt_score_from_storage(entry.score, ply);
            match entry.bound {
                Bound::Exact => return tt_score,
                Bound::Lower if tt_score >= beta => return tt_score,
                Bound::Upper if tt_score <= alpha => return tt_score,
                _ => {}
            }
        }
    }

    let mut moves = legal_moves_in_place(position);
    if moves.is_empty() {
        return terminal_score(position, ply);
    }

    order_moves(position, &mut moves, tt_move, ctx.killer_at(depth), ctx);

    let mut best = -SCORE_INFINITY;
    let mut best_move = None;

    for (move_index, mv) in moves.into_iter().enumerate() {
        let quiet = is_quiet(position, mv);
        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        let score = search_child(position, scorer, depth, alpha, beta, ply + 1, move_index, algorithm, ctx);
        unmake_move_in_place(position, undo);

        if score > best {
            best = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            if quiet {
                ctx.record_killer(depth, mv);
                ctx.record_history(mv, depth);
            }
            break;
        }
    }

    let bound = if best <= alpha_orig {
        Bound::Upper
    } else if best >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    ctx.tt.store(TTEntry {
        key,
        depth,
        score: tt_score_for_storage(best, ply),
        bound,
        best_move,
    });

    best
}

/// Score one child (already applied) from the parent's point of view.
#[allow(clippy::too_many_arguments)]
#[inline]
fn search_child<S: BoardScorer + ?Sized>(
    position: &mut Position,
    scorer: &S,
    depth: u8,
    alpha: i32,
    beta: i32,
    child_ply: u8,
    move_index: usize,
    algorithm: SearchAlgorithm,
    ctx: &mut SearchContext,
) -> i32 {
    let child_depth = depth - 1;
    if algorithm == SearchAlgorithm::AlphaBeta || move_index == 0 {
        return -negamax(position, scorer, child_depth, -beta, -alpha, child_ply, algorithm, ctx);
    }

    let probe = -negamax(position, scorer, child_depth, -alpha - 1, -alpha, child_ply, algorithm, ctx);
    if probe > alpha && probe < beta {
        -negamax(position, scorer, child_depth, -beta, -alpha, child_ply, algorithm, ctx)
    } else {
        probe
    }
}

/// Horizon extension over captures and promotions. Quiet checks are added
/// at the first quiescence ply; a side in check searches every evasion and
/// may not stand pat.
pub fn quiescence<S: BoardScorer + ?Sized>(
    position: &mut Position,
    scorer: &S,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    qply: u8,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    let side = position.side_to_move();
    let in_check = is_in_check(&position.board, side);

    let mut moves = legal_moves_in_place(position);
    if moves.is_empty() {
        return terminal_score(position, ply);
    }

    let stand_pat = scorer.score(&position.board, &position.state);
    if qply >= QUIESCENCE_MAX_PLY {
        return stand_pat;
    }

    let mut best = -SCORE_INFINITY;
    if !in_check {
        if stand_pat >= beta {
            return stand_pat;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        best = stand_pat;

        let include_checks = qply == 0;
        moves.retain(|&mv| is_tactical(position, mv) || (include_checks && gives_check(position, mv)));
    }
    moves.sort_by_cached_key(|&mv| Reverse(tactical_order_score(position, mv)));

    for mv in moves {
        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        let score = -quiescence(position, scorer, -beta, -alpha, ply + 1, qply + 1, nodes);
        unmake_move_in_place(position, undo);

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Unpruned, cache-free negamax with the same leaf evaluation as `negamax`.
pub fn minimax<S: BoardScorer + ?Sized>(position: &mut Position, scorer: &S, depth: u8) -> i32 {
    let mut nodes = 0;
    minimax_inner(position, scorer, depth, 0, &mut nodes)
}

fn minimax_inner<S: BoardScorer + ?Sized>(
    position: &mut Position,
    scorer: &S,
    depth: u8,
    ply: u8,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return quiescence(position, scorer, -SCORE_INFINITY, SCORE_INFINITY, ply, 0, nodes);
    }

    *nodes += 1;
    let moves = legal_moves_in_place(position);
    if moves.is_empty() {
        return terminal_score(position, ply);
    }

    let mut best = -SCORE_INFINITY;
    for mv in moves {
        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        let score = -minimax_inner(position, scorer, depth - 1, ply + 1, nodes);
        unmake_move_in_place(position, undo);
        best = best.max(score);
    }
    best
}

/// Score of a position with no legal moves: mated or stalemated.
#[inline]
pub fn terminal_score(position: &Position, ply: u8) -> i32 {
    if is_in_check(&position.board, position.side_to_move()) {
        -(MATE_SCORE - i32::from(ply))
    } else {
        0
    }
}

#[inline]
fn tt_score_for_storage(score: i32, ply: u8) -> i32 {
    if score >= MATE_TT_THRESHOLD {
        score.saturating_add(i32::from(ply))
    } else if score <= -MATE_TT_THRESHOLD {
        score.saturating_sub(i32::from(ply))
    } else {
        score
    }
}

#[inline]
fn tt_score_from_storage(score: i32, ply: u8) -> i32 {
    if score >= MATE_TT_THRESHOLD {
        score.saturating_sub(i32::from(ply))
    } else if score <= -MATE_TT_THRESHOLD {
        score.saturating_add(i32::from(ply))
    } else {
        score
    }
}

/// Ordering weight used for MVV-LVA; the king outranks everything.
#[inline]
const fn order_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight | PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 10,
    }
}

#[inline]
fn mvv_lva(position: &Position, mv: Move) -> Option<i32> {
    let (_, victim) = captured_piece(&position.board, position.state.en_passant, mv)?;
    let attacker = position.board.get(mv.from)?;
    Some(order_value(victim.kind) * 10 - order_value(attacker.kind))
}

#[inline]
fn is_tactical(position: &Position, mv: Move) -> bool {
    mv.promotion.is_some() || captured_piece(&position.board, position.state.en_passant, mv).is_some()
}

#[inline]
fn is_quiet(position: &Position, mv: Move) -> bool {
    !is_tactical(position, mv)
}

fn gives_check(position: &mut Position, mv: Move) -> bool {
    let Some(undo) = make_move_unchecked(position, mv) else {
        return false;
    };
    let check = is_in_check(&position.board, position.side_to_move());
    unmake_move_in_place(position, undo);
    check
}

#[inline]
fn tactical_order_score(position: &Position, mv: Move) -> i32 {
    if let Some(score) = mvv_lva(position, mv) {
        CAPTURE_ORDER + score
    } else if let Some(kind) = mv.promotion {
        PROMOTION_ORDER + piece_value(kind)
    } else {
        0
    }
}

/// Order moves: transposition move, captures by MVV-LVA, promotions, the
/// killer for this depth, then quiet moves by history.
pub(crate) fn order_moves(
    position: &Position,
    moves: &mut [Move],
    tt_move: Option<Move>,
    killer: Option<Move>,
    ctx: &SearchContext,
) {
    moves.sort_by_cached_key(|&mv| {
        let score = if Some(mv) == tt_move {
            TT_MOVE_ORDER
        } else if is_tactical(position, mv) {
            tactical_order_score(position, mv)
        } else if Some(mv) == killer {
            KILLER_ORDER
        } else {
            ctx.history_score(mv)
        };
        Reverse(score)
    });
}
