//! Per-search mutable state: transposition table, killers, history and the
//! node counter.
//!
//! A context is created per top-level search and threaded through the
//! recursion by `&mut`, so concurrent searches never share caches.

use crate::game_state::chess_types::Move;
use crate::search::transposition_table::TranspositionTable;

/// Deepest nominal search depth; killer slots are indexed by remaining depth.
pub const MAX_SEARCH_DEPTH: u8 = 64;
pub const DEFAULT_HASH_MB: usize = 16;

const HISTORY_CAP: i32 = 50_000;

type HistoryTable = [[i32; 64]; 64];

#[derive(Debug, Clone)]
pub struct SearchContext {
    pub tt: TranspositionTable,
    killers: [Option<Move>; MAX_SEARCH_DEPTH as usize + 1],
    history: Box<HistoryTable>,
    pub nodes: u64,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::with_hash_mb(DEFAULT_HASH_MB)
    }
}

impl SearchContext {
    pub fn with_hash_mb(hash_mb: usize) -> Self {
        Self::with_table(TranspositionTable::new_with_mb(hash_mb))
    }

    pub fn with_table(tt: TranspositionTable) -> Self {
        Self {
            tt,
            killers: [None; MAX_SEARCH_DEPTH as usize + 1],
            history: Box::new([[0; 64]; 64]),
            nodes: 0,
        }
    }

    #[inline]
    pub fn killer_at(&self, depth: u8) -> Option<Move> {
        self.killers[Self::killer_slot(depth)]
    }

    #[inline]
    pub fn record_killer(&mut self, depth: u8, mv: Move) {
        self.killers[Self::killer_slot(depth)] = Some(mv);
    }

    #[inline]
    pub fn history_score(&self, mv: Move) -> i32 {
        self.history[mv.from.index()][mv.to.index()]
    }

    /// Reward a quiet cutoff move by `depth²`.
    #[inline]
    pub fn record_history(&mut self, mv: Move, depth: u8) {
        let bonus = i32::from(depth) * i32::from(depth);
        let entry = &mut self.history[mv.from.index()][mv.to.index()];
        *entry = (*entry + bonus).min(HISTORY_CAP);
    }

    /// Forget killers and history; the transposition table is kept.
    pub fn reset_heuristics(&mut self) {
        self.killers.fill(None);
        self.history.iter_mut().for_each(|row| row.fill(0));
        self.nodes = 0;
    }

    #[inline]
    fn killer_slot(depth: u8) -> usize {
        usize::from(depth.min(MAX_SEARCH_DEPTH))
    }
}
