//! Bishop, rook and queen rays.

use super::MoveList;
use chess_core::{Board, Move, Piece, PieceKind, Square};

/// (row, column) steps along files and ranks.
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// (row, column) steps along diagonals.
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen steps: rook and bishop directions combined.
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen => &QUEEN_DIRS,
        _ => &[],
    }
}

/// Walks each ray outward from `from` until it leaves the board or meets a
/// piece. An enemy piece ends the ray as a capture; a friendly one ends it
/// without a move.
pub(super) fn generate_slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    for &(d_row, d_col) in directions(piece.kind) {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.get(to) {
                None => moves.push(Move::normal(from, to)),
                Some(other) => {
                    if other.color != piece.color {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
