//! Pawn pushes, captures and promotions.

use super::MoveList;
use chess_core::{Board, Move, Piece, PieceKind, Square};

/// Pushes a pawn move, expanding it into one move per promotion kind when it
/// lands on the far rank.
fn push_pawn_move(piece: Piece, from: Square, to: Square, moves: &mut MoveList) {
    if to.rank() == piece.color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

pub(super) fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveList) {
    let dir = piece.color.pawn_direction();

    // Single and double pushes
    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.get(sq).is_none()) {
        push_pawn_move(piece, from, one, moves);

        if from.rank() == piece.color.pawn_start_rank() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.get(sq).is_none()) {
                moves.push(Move::normal(from, two));
            }
        }
    }

    // Captures (left and right)
    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if board.get(to).is_some_and(|other| other.color != piece.color) {
            push_pawn_move(piece, from, to, moves);
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

    fn pawn(color: Color) -> Piece {
        Piece::new(color, PieceKind::Pawn)
    }

    #[test]
    fn start_rank_pawn_pushes_one_or_two() {
        let board = Board::startpos();
        let moves = pseudo_legal_moves(&board, sq("e2"));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::normal(sq("e2"), sq("e3"))));
        assert!(moves.contains(&Move::normal(sq("e2"), sq("e4"))));

        let moves = pseudo_legal_moves(&board, sq("d7"));
        assert!(moves.contains(&Move::normal(sq("d7"), sq("d6"))));
        assert!(moves.contains(&Move::normal(sq("d7"), sq("d5"))));
    }

    #[test]
    fn double_push_only_from_start_rank() {
        let mut board = Board::empty();
        board.place(sq("e3"), pawn(Color::White));
        let moves = pseudo_legal_moves(&board, sq("e3"));
        assert_eq!(moves.as_slice(), &[Move::normal(sq("e3"), sq("e4"))]);
    }

    #[test]
    fn blocked_pawn() {
        let mut board = Board::empty();
        board.place(sq("e2"), pawn(Color::White));
        board.place(sq("e3"), Piece::new(Color::Black, PieceKind::Knight));
        assert!(pseudo_legal_moves(&board, sq("e2")).is_empty());

        // Intermediate square free but destination occupied.
        board.remove(sq("e3"));
        board.place(sq("e4"), Piece::new(Color::White, PieceKind::Bishop));
        let moves = pseudo_legal_moves(&board, sq("e2"));
        assert_eq!(moves.as_slice(), &[Move::normal(sq("e2"), sq("e3"))]);
    }

    #[test]
    fn diagonal_needs_enemy_piece() {
        let mut board = Board::empty();
        board.place(sq("d5"), pawn(Color::Black));
        board.place(sq("c4"), pawn(Color::White));
        board.place(sq("e4"), pawn(Color::Black));

        let moves = pseudo_legal_moves(&board, sq("d5"));
        assert!(moves.contains(&Move::normal(sq("d5"), sq("c4"))));
        assert!(!moves.contains(&Move::normal(sq("d5"), sq("e4"))));
        assert!(moves.contains(&Move::normal(sq("d5"), sq("d4"))));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn edge_pawn_captures_one_side() {
        let mut board = Board::empty();
        board.place(sq("a2"), pawn(Color::White));
        board.place(sq("b3"), pawn(Color::Black));
        let moves = pseudo_legal_moves(&board, sq("a2"));
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::normal(sq("a2"), sq("b3"))));
    }

    #[test]
    fn promotion_expands_into_four_kinds() {
        let mut board = Board::empty();
        board.place(sq("b7"), pawn(Color::White));
        board.place(sq("a8"), Piece::new(Color::Black, PieceKind::Rook));
        board.place(sq("c8"), Piece::new(Color::White, PieceKind::Rook));

        let moves = pseudo_legal_moves(&board, sq("b7"));
        // Push to b8 and capture on a8, four kinds each; c8 is friendly.
        assert_eq!(moves.len(), 8);
        for to in ["a8", "b8"] {
            for kind in PieceKind::PROMOTIONS {
                assert!(moves.contains(&Move::promoting(sq("b7"), sq(to), kind)));
            }
            assert!(!moves.contains(&Move::normal(sq("b7"), sq(to))));
        }
    }

    #[test]
    fn black_promotes_on_first_rank() {
        let mut board = Board::empty();
        board.place(sq("g2"), pawn(Color::Black));
        let moves = pseudo_legal_moves(&board, sq("g2"));
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.to() == sq("g1") && m.promotion().is_some()));
    }

    #[test]
    fn pawn_on_far_rank_has_no_moves() {
        // Not reachable in play, but a loaded board may hold one.
        let mut board = Board::empty();
        board.place(sq("c8"), pawn(Color::White));
        assert!(pseudo_legal_moves(&board, sq("c8")).is_empty());
    }
}
