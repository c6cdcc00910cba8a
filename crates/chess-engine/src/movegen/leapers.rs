//! Knight and king steps.

use super::MoveList;
use chess_core::{Board, Move, Piece, PieceKind, Square};

/// (row, column) knight leaps.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// (row, column) unit king steps.
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Emits every offset that lands on the board on an empty or enemy square.
pub(super) fn generate_leaper_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    moves: &mut MoveList,
) {
    let deltas: &[(i8, i8)] = match piece.kind {
        PieceKind::Knight => &KNIGHT_DELTAS,
        PieceKind::King => &KING_DELTAS,
        _ => &[],
    };

    for &(d_row, d_col) in deltas {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.get(to).map_or(true, |other| other.color != piece.color) {
            moves.push(Move::normal(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::pseudo_legal_moves;
    use super::*;
    use chess_core::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn knight_in_center_and_corner() {
        let mut board = Board::empty();
        board.place(sq("d4"), Piece::new(Color::White, PieceKind::Knight));
        board.place(Square::H8, Piece::new(Color::Black, PieceKind::Knight));
        assert_eq!(pseudo_legal_moves(&board, sq("d4")).len(), 8);
        assert_eq!(pseudo_legal_moves(&board, Square::H8).len(), 2);
    }

    #[test]
    fn king_on_edge() {
        let mut board = Board::empty();
        board.place(Square::E1, Piece::new(Color::White, PieceKind::King));
        assert_eq!(pseudo_legal_moves(&board, Square::E1).len(), 5);
        board.place(Square::A8, Piece::new(Color::Black, PieceKind::King));
        assert_eq!(pseudo_legal_moves(&board, Square::A8).len(), 3);
    }

    #[test]
    fn captures_enemy_but_not_friend() {
        let mut board = Board::empty();
        board.place(sq("b1"), Piece::new(Color::White, PieceKind::Knight));
        board.place(sq("c3"), Piece::new(Color::Black, PieceKind::Pawn));
        board.place(sq("a3"), Piece::new(Color::White, PieceKind::Pawn));

        let moves = pseudo_legal_moves(&board, sq("b1"));
        assert!(moves.contains(&Move::normal(sq("b1"), sq("c3"))));
        assert!(!moves.contains(&Move::normal(sq("b1"), sq("a3"))));
        assert!(moves.contains(&Move::normal(sq("b1"), sq("d2"))));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn startpos_knight_has_two_moves() {
        let board = Board::startpos();
        assert_eq!(pseudo_legal_moves(&board, Square::G1).len(), 2);
        assert!(pseudo_legal_moves(&board, Square::E1).is_empty());
    }
}
