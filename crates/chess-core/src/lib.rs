//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for move representation
//! - [`Board`] for piece storage, plus the placement text format
//!
//! All types derive serde traits so a transport layer can choose its own
//! wire format.

mod board;
mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use board::{Board, Undo};
pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use placement::PlacementError;
pub use square::{File, Rank, Square, SquareIndexError};
