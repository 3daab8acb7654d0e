use std::panic;
use std::thread;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_unchecked, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::legal_moves_in_place;
use crate::move_generation::legal_move_shared::{captured_piece, is_castling_move, is_en_passant_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal move tree rooted at `position`.
pub fn perft(position: &Position, depth: u8) -> u64 {
    let mut scratch = *position;
    perft_nodes(&mut scratch, depth)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut scratch = *position;
    let moves = legal_moves_in_place(&mut scratch);
    let mut divided = Vec::with_capacity(moves.len());
    for mv in moves {
        let Some(undo) = make_move_unchecked(&mut scratch, mv) else {
            continue;
        };
        divided.push((mv, perft_nodes(&mut scratch, depth - 1)));
        unmake_move_in_place(&mut scratch, undo);
    }
    divided
}

/// Leaf count with move-kind breakdown of the final ply.
pub fn perft_detailed(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = *position;
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

/// `perft` with one worker thread per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut root = *position;
    let moves = legal_moves_in_place(&mut root);

    thread::scope(|scope| {
        let handles: Vec<_> = moves
            .into_iter()
            .map(|mv| {
                let mut child = root;
                scope.spawn(move || {
                    match make_move_unchecked(&mut child, mv) {
                        Some(_) => perft_nodes(&mut child, depth - 1),
                        None => 0,
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .sum()
    })
}

fn perft_nodes(position: &mut Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves_in_place(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        nodes += perft_nodes(position, depth - 1);
        unmake_move_in_place(position, undo);
    }
    nodes
}

fn perft_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) {
    let moves = legal_moves_in_place(position);
    for mv in moves {
        if depth == 1 {
            counts.merge(classify_leaf(position, mv));
            continue;
        }

        let Some(undo) = make_move_unchecked(position, mv) else {
            continue;
        };
        perft_recurse(position, depth - 1, counts);
        unmake_move_in_place(position, undo);
    }
}

fn classify_leaf(position: &mut Position, mv: Move) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if let Some(moved) = position.board.get(mv.from) {
        if is_castling_move(moved, mv) {
            counts.castles = 1;
        }
        if is_en_passant_move(moved, mv, position.state.en_passant) {
            counts.en_passant = 1;
        }
    }
    if captured_piece(&position.board, position.state.en_passant, mv).is_some() {
        counts.captures = 1;
    }
    if mv.promotion.is_some() {
        counts.promotions = 1;
    }

    let Some(undo) = make_move_unchecked(position, mv) else {
        return counts;
    };
    let defender = position.side_to_move();
    if is_in_check(&position.board, defender) {
        counts.checks = 1;
        if legal_moves_in_place(position).is_empty() {
            counts.checkmates = 1;
        }
    }
    unmake_move_in_place(position, undo);

    counts
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_detailed, perft_divide, perft_multi_threaded};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn kiwipete() -> Position {
        let board = Board::from_rows(&[
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ])
        .expect("kiwipete should parse");
        Position::new(board, GameState::new_game())
    }

    fn pinned_endgame() -> Position {
        let board = Board::from_rows(&[
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ])
        .expect("endgame should parse");
        Position::new(board, GameState::bare(Color::White))
    }

    #[test]
    fn start_position_node_counts() {
        let start = Position::new_game();
        assert_eq!(perft(&start, 0), 1);
        assert_eq!(perft(&start, 1), 20);
        assert_eq!(perft(&start, 2), 400);
        assert_eq!(perft(&start, 3), 8_902);
    }

    #[test]
    fn start_position_depth_three_breakdown() {
        let counts = perft_detailed(&Position::new_game(), 3);
        assert_eq!(counts.nodes, 8_902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_node_counts() {
        let position = kiwipete();
        assert_eq!(perft(&position, 1), 48);
        assert_eq!(perft(&position, 2), 2_039);
    }

    #[test]
    fn kiwipete_breakdown() {
        let depth_one = perft_detailed(&kiwipete(), 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft_detailed(&kiwipete(), 2);
        assert_eq!(depth_two.nodes, 2_039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
        assert_eq!(depth_two.checks, 3);
    }

    #[test]
    fn pinned_endgame_node_counts() {
        let position = pinned_endgame();
        assert_eq!(perft(&position, 1), 14);
        assert_eq!(perft(&position, 2), 191);
        assert_eq!(perft(&position, 3), 2_812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let position = kiwipete();
        let divided = perft_divide(&position, 2);
        assert_eq!(divided.len(), 48);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
    }

    #[test]
    fn threaded_matches_single_threaded() {
        let start = Position::new_game();
        assert_eq!(perft_multi_threaded(&start, 3), perft(&start, 3));
    }
}
