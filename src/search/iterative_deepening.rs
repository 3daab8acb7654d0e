//! Iterative deepening driver.
//!
//! Runs the root search at depth 1, 2, ... and keeps the result of the last
//! completed iteration. Depth 1 always runs; the time budget is checked
//! only between iterations, so a running iteration is never interrupted.

use std::time::{Duration, Instant};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move_unchecked;
use crate::move_generation::legal_move_generator::legal_moves_in_place;
use crate::search::alpha_beta::{search_root, SearchAlgorithm};
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::search_context::{SearchContext, DEFAULT_HASH_MB, MAX_SEARCH_DEPTH};
use crate::search::transposition_table::TTStats;
use crate::search::zobrist::position_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Wall-clock budget; `None` searches every depth up to `max_depth`.
    pub movetime: Option<Duration>,
    pub algorithm: SearchAlgorithm,
    pub hash_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            movetime: None,
            algorithm: SearchAlgorithm::PrincipalVariation,
            hash_mb: DEFAULT_HASH_MB,
        }
    }
}

impl SearchConfig {
    pub fn with_movetime(movetime: Duration) -> Self {
        Self {
            movetime: Some(movetime),
            ..Self::default()
        }
    }

    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub tt_stats: TTStats,
}

/// Best move for the side to move within `time_budget`, or `None` when the
/// side to move has no legal moves.
pub fn find_best_move(board: &Board, state: &GameState, time_budget: Duration) -> Option<Move> {
    let config = SearchConfig::with_movetime(time_budget);
    let mut ctx = SearchContext::with_hash_mb(config.hash_mb);
    iterative_deepening_search(board, state, &StandardScorer, config, &mut ctx).best_move
}

pub fn iterative_deepening_search<S: BoardScorer + ?Sized>(
    board: &Board,
    state: &GameState,
    scorer: &S,
    config: SearchConfig,
    ctx: &mut SearchContext,
) -> SearchResult {
    let started_at = Instant::now();
    let mut root = Position::new(*board, *state);

    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(board, state),
            reached_depth: 0,
            nodes: 1,
            elapsed_ms: started_at.elapsed().as_millis() as u64,
            tt_stats: ctx.tt.stats(),
        };
    }

    let max_depth = config.max_depth.min(MAX_SEARCH_DEPTH);
    let mut result = SearchResult::default();
    ctx.nodes = 0;

    for depth in 1..=max_depth {
        if depth > 1 && budget_exhausted(started_at, config.movetime) {
            break;
        }

        ctx.tt.new_generation();
        let (best_move, best_score) = search_root(&mut root, scorer, depth, config.algorithm, ctx);

        result.best_move = best_move;
        result.best_score = best_score;
        result.reached_depth = depth;
        result.nodes = ctx.nodes;

        log::debug!(
            "depth {} score {} nodes {} time {}ms best {}",
            depth,
            best_score,
            ctx.nodes,
            started_at.elapsed().as_millis(),
            best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
        );

        // No legal moves: deeper iterations cannot change the verdict.
        if best_move.is_none() {
            break;
        }
    }

    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result.tt_stats = ctx.tt.stats();
    result
}

#[inline]
fn budget_exhausted(started_at: Instant, movetime: Option<Duration>) -> bool {
    movetime.is_some_and(|budget| started_at.elapsed() >= budget)
}

/// Follow stored best moves from the root, stopping at the first missing,
/// illegal or repeating entry.
pub fn principal_variation(
    board: &Board,
    state: &GameState,
    ctx: &mut SearchContext,
    max_length: u8,
) -> Vec<Move> {
    let mut position = Position::new(*board, *state);
    let mut pv = Vec::new();
    let mut seen = Vec::new();

    for _ in 0..max_length {
        let key = position_key(&position);
        if seen.contains(&key) {
            break;
        }
        seen.push(key);

        let Some(best_move) = ctx.tt.probe(key).and_then(|entry| entry.best_move) else {
            break;
        };
        if !legal_moves_in_place(&mut position).contains(&best_move) {
            break;
        }
        if make_move_unchecked(&mut position, best_move).is_none() {
            break;
        }
        pv.push(best_move);
    }

    pv
}
