//! Fixed-size transposition table keyed by Zobrist hash.
//!
//! Direct indexing with depth-preferred replacement; entries untouched for
//! several generations may be overwritten by shallower results.

use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    pub depth: u8,
    /// Ply-normalized: mate scores count plies from this node, not the root.
    pub score: i32,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    generations: Vec<u8>,
    current_generation: u8,
    stats: TTStats,
}

impl TranspositionTable {
    const AGE_REPLACE_THRESHOLD: u8 = 4;
    const DEPTH_REPLACE_MARGIN: u8 = 2;

    pub fn new_with_mb(size_mb: usize) -> Self {
        let bytes = size_mb.max(1) * 1024 * 1024;
        Self::with_entries(bytes / std::mem::size_of::<Option<TTEntry>>().max(1))
    }

    /// Table with exactly `count` slots (at least one).
    pub fn with_entries(count: usize) -> Self {
        let count = count.max(1);
        Self {
            entries: vec![None; count],
            generations: vec![0; count],
            current_generation: 0,
            stats: TTStats::default(),
        }
    }

    /// Advance the generation; called once per iterative-deepening iteration.
    #[inline]
    pub fn new_generation(&mut self) {
        self.current_generation = self.current_generation.wrapping_add(1);
        if self.current_generation == 0 {
            log::trace!("transposition table generation counter wrapped");
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.generations.fill(0);
        self.current_generation = 0;
        self.stats = TTStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TTStats {
        self.stats
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    #[inline]
    fn idx(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    pub fn probe(&mut self, key: u64) -> Option<TTEntry> {
        self.stats.probes += 1;
        let idx = self.idx(key);
        let hit = self.entries[idx].filter(|e| e.key == key);
        if hit.is_some() {
            self.stats.hits += 1;
            self.generations[idx] = self.current_generation;
        }
        hit
    }

    pub fn store(&mut self, entry: TTEntry) {
        self.stats.stores += 1;
        let idx = self.idx(entry.key);
        let replace = match self.entries[idx] {
            None => true,
            Some(existing) if existing.key == entry.key => entry.depth >= existing.depth,
            Some(existing) => {
                let age = self.current_generation.wrapping_sub(self.generations[idx]);
                age >= Self::AGE_REPLACE_THRESHOLD
                    || entry.depth.saturating_add(Self::DEPTH_REPLACE_MARGIN) >= existing.depth
            }
        };

        if replace {
            self.entries[idx] = Some(entry);
            self.generations[idx] = self.current_generation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, TTEntry, TranspositionTable};
    use crate::game_state::chess_types::{Move, Square};

    fn entry(key: u64, depth: u8, score: i32, bound: Bound) -> TTEntry {
        TTEntry {
            key,
            depth,
            score,
            bound,
            best_move: Some(Move::new(Square::new(6, 4), Square::new(4, 4))),
        }
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut tt = TranspositionTable::new_with_mb(1);
        let stored = entry(123, 5, 42, Bound::Exact);
        tt.store(stored);
        assert_eq!(tt.probe(123), Some(stored));
        assert_eq!(tt.probe(124), None);

        let stats = tt.stats();
        assert_eq!(stats.stores, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn same_key_keeps_deeper_result() {
        let mut tt = TranspositionTable::new_with_mb(1);
        let key = 555;
        tt.store(entry(key, 2, 1, Bound::Upper));
        tt.store(entry(key, 1, 9, Bound::Exact));
        assert_eq!(tt.probe(key).expect("exists").score, 1);

        tt.store(entry(key, 6, 3, Bound::Lower));
        let got = tt.probe(key).expect("exists");
        assert_eq!(got.depth, 6);
        assert_eq!(got.bound, Bound::Lower);
    }

    #[test]
    fn colliding_key_needs_depth_or_age() {
        let mut tt = TranspositionTable::with_entries(8);
        tt.store(entry(3, 9, 10, Bound::Exact));

        // Same slot, much shallower: rejected while the resident is fresh.
        tt.store(entry(11, 2, 20, Bound::Exact));
        assert_eq!(tt.probe(3).map(|e| e.score), Some(10));
        assert_eq!(tt.probe(11), None);

        // Within the depth margin: replaced.
        tt.store(entry(19, 7, 30, Bound::Exact));
        assert_eq!(tt.probe(3), None);
        assert_eq!(tt.probe(19).map(|e| e.score), Some(30));
    }

    #[test]
    fn stale_entries_are_evicted() {
        let mut tt = TranspositionTable::with_entries(8);
        tt.store(entry(4, 12, 10, Bound::Exact));
        for _ in 0..4 {
            tt.new_generation();
        }
        tt.store(entry(12, 1, 20, Bound::Exact));
        assert_eq!(tt.probe(12).map(|e| e.score), Some(20));
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = TranspositionTable::with_entries(16);
        tt.store(entry(1, 1, 1, Bound::Exact));
        assert_eq!(tt.occupied(), 1);
        tt.clear();
        assert_eq!(tt.occupied(), 0);
        assert_eq!(tt.len(), 16);
        assert_eq!(tt.stats().stores, 0);
    }
}
