//! Legal move filtering and unvalidated move application.

use crate::movegen::{pseudo_legal_moves, MoveList};
use crate::GameError;
use chess_core::{Board, Color, Move, Piece, PieceKind, Square};

use super::check::is_in_check;

/// Returns the legal moves of the piece on `from`, or an empty list when the
/// square is empty.
///
/// Each pseudo-legal candidate is made on a scratch copy of the board and
/// kept only if the mover's king is not attacked afterwards; the copy is
/// restored with [`Board::unmake`] between candidates, so one copy serves
/// the whole list.
pub fn legal_moves(board: &Board, from: Square) -> Result<MoveList, GameError> {
    let Some(piece) = board.get(from) else {
        return Ok(MoveList::new());
    };

    let candidates = pseudo_legal_moves(board, from);
    let mut legal = MoveList::new();
    if candidates.is_empty() {
        return Ok(legal);
    }

    let mut scratch = board.clone();
    for &mv in &candidates {
        let undo = scratch.make(mv);
        let exposed = is_in_check(&scratch, piece.color);
        scratch.unmake(undo);
        if exposed? {
            tracing::trace!(?mv, "dropped: leaves own king attacked");
        } else {
            legal.push(mv);
        }
    }

    Ok(legal)
}

/// Returns every legal move of `color`, in square order.
pub fn all_legal_moves(board: &Board, color: Color) -> Result<Vec<Move>, GameError> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces_of(color) {
        moves.extend_from_slice(legal_moves(board, from)?.as_slice());
    }
    Ok(moves)
}

/// Performs a move without validating it: the origin's occupant replaces
/// whatever stands on the destination, and a pawn reaching its far rank
/// becomes the move's promotion kind (a queen if the move carries none, or
/// one a pawn cannot promote to).
///
/// Returns the captured piece, if any. Does nothing when the origin is empty.
pub fn play(board: &mut Board, mv: Move) -> Option<Piece> {
    let piece = board.remove(mv.from())?;
    let captured = board.get(mv.to());

    let placed = if piece.kind == PieceKind::Pawn && mv.to().rank() == piece.color.promotion_rank()
    {
        let kind = mv.promotion().filter(|kind| kind.is_promotable());
        Piece::new(piece.color, kind.unwrap_or(PieceKind::Queen))
    } else {
        piece
    };
    board.place(mv.to(), placed);

    captured
}
