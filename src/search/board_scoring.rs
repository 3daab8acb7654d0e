//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so alternate heuristics can be swapped without touching search code.
//! Scorers report white-positive centipawns; `score` converts to the side
//! to move's point of view for negamax.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_into;
use crate::moves::king_moves::king_targets;

pub const MATE_SCORE: i32 = 30000;

pub const CENTER_BONUS: i32 = 15;
pub const MOBILITY_WEIGHT: i32 = 2;
pub const KING_ZONE_PENALTY: i32 = 20;
pub const DOUBLED_PAWN_PENALTY: i32 = 15;
pub const ISOLATED_PAWN_PENALTY: i32 = 12;

const CENTER_SQUARES: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

pub trait BoardScorer: Send + Sync {
    /// Static score, positive favors white.
    fn evaluate(&self, board: &Board, state: &GameState) -> i32;

    /// Score from the perspective of the side to move.
    #[inline]
    fn score(&self, board: &Board, state: &GameState) -> i32 {
        let white_minus_black = self.evaluate(board, state);
        match state.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Material and positional terms: piece-square tables, center control,
/// mobility, king safety and pawn structure.
pub fn evaluate(board: &Board, state: &GameState) -> i32 {
    StandardScorer.evaluate(board, state)
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[inline]
const fn signed_for(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    fn material_balance_white_minus_black(board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| signed_for(piece.color, piece_value(piece.kind)))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn evaluate(&self, board: &Board, _state: &GameState) -> i32 {
        Self::material_balance_white_minus_black(board)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    fn material_and_placement(board: &Board) -> i32 {
        board
            .pieces()
            .map(|(square, piece)| {
                let value = piece_value(piece.kind) + piece_square_value(piece, square);
                signed_for(piece.color, value)
            })
            .sum()
    }

    fn center_control(board: &Board) -> i32 {
        CENTER_SQUARES
            .iter()
            .filter_map(|&square| board.color_at(square))
            .map(|color| signed_for(color, CENTER_BONUS))
            .sum()
    }

    fn mobility(board: &Board, state: &GameState) -> i32 {
        let position = Position::new(*board, *state);
        let mut moves = Vec::with_capacity(64);
        generate_pseudo_legal_into(&position, &mut moves);
        signed_for(state.side_to_move, moves.len() as i32 * MOBILITY_WEIGHT)
    }

    fn king_safety(board: &Board) -> i32 {
        [Color::White, Color::Black]
            .into_iter()
            .map(|color| {
                let Some(king) = board.find(Piece::new(color, PieceKind::King)) else {
                    return 0;
                };
                let attackers = king_targets(king)
                    .filter(|&square| board.color_at(square) == Some(color.opposite()))
                    .count() as i32;
                signed_for(color, -attackers * KING_ZONE_PENALTY)
            })
            .sum()
    }

    fn pawn_structure(board: &Board) -> i32 {
        [Color::White, Color::Black]
            .into_iter()
            .map(|color| signed_for(color, -pawn_structure_penalty(board, color)))
            .sum()
    }
}

impl BoardScorer for StandardScorer {
    fn evaluate(&self, board: &Board, state: &GameState) -> i32 {
        Self::material_and_placement(board)
            + Self::center_control(board)
            + Self::mobility(board, state)
            + Self::king_safety(board)
            + Self::pawn_structure(board)
    }
}

fn pawn_structure_penalty(board: &Board, color: Color) -> i32 {
    let mut files = [0i32; 8];
    for (square, piece) in board.pieces_of(color) {
        if piece.kind == PieceKind::Pawn {
            files[usize::from(square.col)] += 1;
        }
    }

    let mut penalty = 0;
    for (file, &count) in files.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if count > 1 {
            penalty += (count - 1) * DOUBLED_PAWN_PENALTY;
        }
        let left = file.checked_sub(1).map_or(0, |f| files[f]);
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            penalty += ISOLATED_PAWN_PENALTY;
        }
    }
    penalty
}

/// Placement bonus from the piece owner's point of view.
#[inline]
pub fn piece_square_value(piece: Piece, square: Square) -> i32 {
    // Tables are laid out from white's side: row 0 is the eighth rank.
    let row = match piece.color {
        Color::White => usize::from(square.row),
        Color::Black => 7 - usize::from(square.row),
    };
    let col = usize::from(square.col);
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[row][col]
}

type PieceSquareTable = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: PieceSquareTable = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: PieceSquareTable = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  0,   0,   0,   5,   5,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

#[cfg(test)]
mod tests {
    use super::{
        evaluate, piece_square_value, BoardScorer, MaterialScorer, StandardScorer,
        DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY, KING_ZONE_PENALTY, MOBILITY_WEIGHT,
    };
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    /// Flip the board vertically and swap piece colors.
    fn mirrored(board: &Board) -> Board {
        let mut out = Board::empty();
        for (square, piece) in board.pieces() {
            out.set(
                Square::new(7 - square.row, square.col),
                Some(Piece::new(piece.color.opposite(), piece.kind)),
            );
        }
        out
    }

    #[test]
    fn material_scorer_is_balanced_at_start() {
        let board = Board::starting_position();
        let state = GameState::new_game();
        assert_eq!(MaterialScorer.evaluate(&board, &state), 0);
        assert_eq!(MaterialScorer.score(&board, &state), 0);
    }

    #[test]
    fn start_position_only_scores_mobility() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, &GameState::new_game()), 20 * MOBILITY_WEIGHT);
        assert_eq!(evaluate(&board, &GameState::bare(Color::Black)), -20 * MOBILITY_WEIGHT);
    }

    #[test]
    fn score_is_side_to_move_relative() {
        let board = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "........",
            "...QK...",
        ])
        .expect("board should parse");
        let white = GameState::bare(Color::White);
        let black = GameState::bare(Color::Black);
        assert_eq!(MaterialScorer.score(&board, &white), 900);
        assert_eq!(MaterialScorer.score(&board, &black), -900);
    }

    #[test]
    fn mirrored_position_negates_score() {
        let board = Board::from_rows(&[
            "r..qk..r", "ppp..ppp", "..n.bn..", "...pp...", "..PP....", "..N..N..", "PP...PPP",
            "R.BQKB.R",
        ])
        .expect("board should parse");
        let flipped = mirrored(&board);
        for side in [Color::White, Color::Black] {
            let state = GameState::bare(side);
            let mirror_state = GameState::bare(side.opposite());
            assert_eq!(evaluate(&board, &state), -evaluate(&flipped, &mirror_state));
            assert_eq!(
                StandardScorer.score(&board, &state),
                StandardScorer.score(&flipped, &mirror_state)
            );
        }
    }

    #[test]
    fn black_tables_mirror_white_tables() {
        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        let black_knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(
            piece_square_value(white_knight, Square::new(5, 5)),
            piece_square_value(black_knight, Square::new(2, 5))
        );
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(piece_square_value(white_pawn, Square::new(1, 0)), 50);
    }

    #[test]
    fn doubled_and_isolated_pawns_are_penalized() {
        let healthy = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "...PP...",
            "....K...",
        ])
        .expect("board should parse");
        let doubled = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "....P...", "....P...",
            "....K...",
        ])
        .expect("board should parse");

        // Strip positional noise: compare only the pawn-structure delta.
        let penalty_healthy = super::pawn_structure_penalty(&healthy, Color::White);
        let penalty_doubled = super::pawn_structure_penalty(&doubled, Color::White);
        assert_eq!(penalty_healthy, 0);
        assert_eq!(penalty_doubled, DOUBLED_PAWN_PENALTY + ISOLATED_PAWN_PENALTY);
    }

    #[test]
    fn crowded_king_is_penalized() {
        let board = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "...nn...",
            "....K...",
        ])
        .expect("board should parse");
        assert_eq!(StandardScorer::king_safety(&board), -2 * KING_ZONE_PENALTY);
        assert_eq!(StandardScorer::king_safety(&Board::starting_position()), 0);
    }
}
