//! Crate root module declarations for the grid_chess decision core.
//!
//! Exposes the board model, move generation, and search subsystems, and
//! re-exports the small public surface a caller needs: legal move listing,
//! check detection, move application, and best-move search.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod search_context;
    pub mod transposition_table;
    pub mod zobrist;
}

pub use errors::{EngineError, EngineResult, InvalidMoveReason};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastlingRights, Color, Move, Piece, PieceKind, Square};
pub use game_state::game_state::{GameState, Position};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_in_check;
pub use move_generation::legal_move_generator::{legal_moves, pseudo_legal_moves};
pub use search::alpha_beta::SearchAlgorithm;
pub use search::board_scoring::{evaluate, BoardScorer, MaterialScorer, StandardScorer};
pub use search::iterative_deepening::{
    find_best_move, iterative_deepening_search, principal_variation, SearchConfig, SearchResult,
};
pub use search::search_context::SearchContext;
