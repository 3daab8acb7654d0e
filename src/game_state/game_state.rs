//! Side-to-move state and the board/state bundle used by make/unmake.
//!
//! `GameState` is the small exchange record a caller passes alongside a
//! `Board`. `Position` owns both and is what the in-place move applicator and
//! the search mutate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// State with no castling rights and no en-passant target.
    #[inline]
    pub fn bare(side_to_move: Color) -> Self {
        Self {
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub state: GameState,
}

impl Position {
    #[inline]
    pub fn new(board: Board, state: GameState) -> Self {
        Self { board, state }
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new(Board::starting_position(), GameState::new_game())
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }
}
