//! Errors used throughout the engine.
//!
//! `EngineError` is the single error type of the crate. Only boundary
//! operations fail: building a board from the exchange format and applying a
//! caller-supplied move. Search and generation work on values that are valid
//! by construction and never return errors.

use thiserror::Error;

use crate::game_state::chess_types::Move;

/// Why a move handed to the applicator was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("square out of range")]
    OutOfRange,

    #[error("source square is empty")]
    EmptySource,

    #[error("piece does not belong to the side to move")]
    WrongSide,

    #[error("source equals destination")]
    NullMove,

    #[error("destination holds a friendly piece")]
    OwnPieceCaptured,

    /// Promotion present on a non-promoting move, missing on a promoting
    /// pawn move, or naming a pawn or king.
    #[error("promotion field does not match the move")]
    BadPromotion,

    /// Well-formed, but not among the moves the piece on the source square
    /// can make in this position.
    #[error("not a move the piece can make")]
    NotAPieceMove,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },

    #[error("invalid piece code '{0}'")]
    InvalidPieceCode(char),

    #[error("malformed board: {0}")]
    MalformedBoard(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
