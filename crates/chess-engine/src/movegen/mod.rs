//! Pseudo-legal move generation.
//!
//! Moves here follow piece geometry and board occupancy only. They ignore
//! whose turn it is and whether the mover's own king is left attacked; that
//! filter lives in [`rules`](crate::rules).

mod leapers;
mod pawn;
mod sliders;

use chess_core::{Board, Color, Move, PieceKind, Square};

/// A list of moves with a fixed maximum capacity.
///
/// Holds the moves of a single piece (at most 27, for a centralized queen),
/// so a fixed-size array avoids heap allocations during move generation.
/// Whole-side move sets can exceed the capacity on a loaded board and are
/// collected into a `Vec`.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves a list can hold.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Returns true if the list holds a move equal to `m`.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.as_slice().contains(m)
    }

    /// Returns true if some move in the list ends on `to`.
    #[inline]
    pub fn contains_destination(&self, to: Square) -> bool {
        self.iter().any(|m| m.to() == to)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

/// Generates the pseudo-legal moves of the piece on `from`.
///
/// Returns an empty list when the square is empty.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece, &mut moves),
        kind if kind.is_slider() => {
            sliders::generate_slider_moves(board, from, piece, &mut moves)
        }
        _ => leapers::generate_leaper_moves(board, from, piece, &mut moves),
    }

    moves
}

/// Returns true if `target` is the destination of some pseudo-legal move of
/// a `by` piece.
///
/// For an occupied target this is exactly "attacked": pawns only reach an
/// occupied square by capturing it. For an empty target pawn pushes count too.
pub fn is_reachable_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(from, _)| pseudo_legal_moves(board, from).contains_destination(target))
}
