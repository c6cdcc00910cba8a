//! Check, checkmate and stalemate.

use crate::movegen::is_reachable_by;
use crate::GameError;
use chess_core::{Board, Color, Square};

use super::legality::legal_moves;
use super::GameStatus;

/// Locates the king of `color`.
pub fn king_square(board: &Board, color: Color) -> Result<Square, GameError> {
    board
        .king_square(color)
        .ok_or(GameError::NoKingOnBoard(color))
}

/// Returns true if some opposing piece has a pseudo-legal move onto the
/// king of `color`.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, GameError> {
    let king = king_square(board, color)?;
    Ok(is_reachable_by(board, king, color.opposite()))
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_legal_moves(board: &Board, color: Color) -> Result<bool, GameError> {
    for (from, _) in board.pieces_of(color) {
        if !legal_moves(board, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// In check with no legal move.
pub fn is_in_checkmate(board: &Board, color: Color) -> Result<bool, GameError> {
    Ok(is_in_check(board, color)? && !has_legal_moves(board, color)?)
}

/// Not in check, yet no legal move.
pub fn is_in_stalemate(board: &Board, color: Color) -> Result<bool, GameError> {
    Ok(!is_in_check(board, color)? && !has_legal_moves(board, color)?)
}

/// Evaluates check and mobility once and combines them.
pub fn status(board: &Board, color: Color) -> Result<GameStatus, GameError> {
    let in_check = is_in_check(board, color)?;
    let has_moves = has_legal_moves(board, color)?;
    Ok(GameStatus::from_parts(in_check, has_moves))
}
