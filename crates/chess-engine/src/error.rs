//! Error types for game operations.

use chess_core::{Color, Move};
use thiserror::Error;

/// Error type for game operations.
///
/// Every failure is reported to the immediate caller and leaves the game
/// untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    /// The move is not among the legal moves of the piece on its origin.
    #[error("illegal move: {0:?}")]
    IllegalMove(Move),

    /// The piece on the origin belongs to the side that is not on move.
    #[error("wrong turn: {expected} to move, but the piece is {found}")]
    WrongTurn { expected: Color, found: Color },

    /// A side has no king, so check cannot be evaluated.
    #[error("no {0} king on the board")]
    NoKingOnBoard(Color),

    /// The configured policy forbids replacing the board again.
    #[error("board replacement not permitted: the board has already been set")]
    InvalidBoardReplacement,
}
