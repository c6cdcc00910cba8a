//! Board storage.

use crate::{Color, Move, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Back-row ordering from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid holding zero or one piece per square.
///
/// Cloning yields a fully independent board; two boards are equal when every
/// square holds an equal occupant (empty matches empty), and the hash agrees
/// with that equality.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Indexed `[rank][file]`, rank 1 first.
    squares: [[Option<Piece>; 8]; 8],
}

/// What [`Board::make`] needs to put both touched squares back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    mv: Move,
    moved: Option<Piece>,
    captured: Option<Piece>,
}

impl Undo {
    /// The piece that stood on the destination before the move.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates a board in the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank().index() as usize][sq.file().index() as usize]
    }

    /// Sets the occupant of a square; `None` empties it.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.rank().index() as usize][sq.file().index() as usize] = piece;
    }

    /// Puts a piece on a square, replacing any occupant.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Empties a square, returning what stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.get(sq);
        self.set(sq, None);
        piece
    }

    /// Clears the board and sets up the standard starting position.
    pub fn reset(&mut self) {
        *self = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank().index() as usize;
            let pawns = color.pawn_start_rank().index() as usize;
            for (file, kind) in BACK_ROW.into_iter().enumerate() {
                self.squares[back][file] = Some(Piece::new(color, kind));
                self.squares[pawns][file] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    /// Iterates over occupied squares from a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the squares holding pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Returns the square of the given side's king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Moves the occupant of the origin onto the destination without applying
    /// promotion. Whatever stood on the destination is kept in the returned
    /// [`Undo`] so [`unmake`](Self::unmake) can restore it.
    pub fn make(&mut self, mv: Move) -> Undo {
        let moved = self.remove(mv.from());
        let captured = self.get(mv.to());
        self.set(mv.to(), moved);
        Undo {
            mv,
            moved,
            captured,
        }
    }

    /// Reverts a [`make`](Self::make).
    pub fn unmake(&mut self, undo: Undo) {
        self.set(undo.mv.to(), undo.captured);
        self.set(undo.mv.from(), undo.moved);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let symbol = self.squares[rank][file].map_or('.', Piece::symbol);
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
