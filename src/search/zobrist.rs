//! Zobrist hashing for transposition table keys.
//!
//! The keys are drawn from a fixed-seed `StdRng` so hashes are deterministic
//! across runs, which keeps search results reproducible in tests.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = rng.random::<u64>();
            }
        }
    }

    let side_to_move = rng.random::<u64>();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random::<u64>();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.random::<u64>();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Key for a piece standing on a square.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][square.index()]
}

#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[castling_rights.bits()]
}

#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[usize::from(file)]
}

/// Side-to-move toggle, xored in when black is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Full key of a board and its state.
pub fn compute_zobrist_key(board: &Board, state: &GameState) -> u64 {
    let mut key = 0u64;

    for (square, piece) in board.pieces() {
        key ^= piece_square_key(piece, square);
    }

    if state.side_to_move == Color::Black {
        key ^= side_to_move_key();
    }

    key ^= castling_key(state.castling_rights);

    if let Some(ep_square) = state.en_passant {
        key ^= en_passant_file_key(ep_square.col);
    }

    key
}

#[inline]
pub fn position_key(position: &Position) -> u64 {
    compute_zobrist_key(&position.board, &position.state)
}

#[cfg(test)]
mod tests {
    use super::{compute_zobrist_key, position_key};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::apply_move;

    fn kings_only() -> Board {
        Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "........",
            "....K...",
        ])
        .expect("board should parse")
    }

    #[test]
    fn starting_position_hash_is_deterministic() {
        let a = Position::new_game();
        let b = Position::new_game();
        assert_eq!(position_key(&a), position_key(&b));
        assert_ne!(position_key(&a), 0);
    }

    #[test]
    fn side_to_move_changes_hash() {
        let board = kings_only();
        let white = compute_zobrist_key(&board, &GameState::bare(Color::White));
        let black = compute_zobrist_key(&board, &GameState::bare(Color::Black));
        assert_ne!(white, black);
    }

    #[test]
    fn castling_rights_change_hash() {
        let board = Board::from_rows(&[
            "....k...", "........", "........", "........", "........", "........", "........",
            "R...K..R",
        ])
        .expect("board should parse");
        let with_rights = compute_zobrist_key(&board, &GameState::new_game());
        let without_rights = compute_zobrist_key(&board, &GameState::bare(Color::White));
        assert_ne!(with_rights, without_rights);
    }

    #[test]
    fn en_passant_file_changes_hash() {
        let board = kings_only();
        let no_ep = GameState::bare(Color::White);
        let ep = GameState {
            en_passant: Some(Square::new(2, 4)),
            ..no_ep
        };
        assert_ne!(compute_zobrist_key(&board, &no_ep), compute_zobrist_key(&board, &ep));
    }

    #[test]
    fn transpositions_share_a_key() {
        let start = Board::starting_position();
        let state = GameState::new_game();
        let knight_out = Move::new(Square::new(7, 6), Square::new(5, 5));
        let knight_back = Move::new(Square::new(5, 5), Square::new(7, 6));
        let black_out = Move::new(Square::new(0, 6), Square::new(2, 5));
        let black_back = Move::new(Square::new(2, 5), Square::new(0, 6));

        let mut board = start;
        let mut current = state;
        for mv in [knight_out, black_out, knight_back, black_back] {
            let (next_board, next_state) = apply_move(&board, mv, &current).expect("move should apply");
            board = next_board;
            current = next_state;
        }

        assert_eq!(compute_zobrist_key(&board, &current), compute_zobrist_key(&start, &state));
    }
}
