//! Move representation.

use crate::{PieceKind, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chess move: origin, destination, and the kind a pawn promotes to, if any.
///
/// Encoded compactly: 6 bits from, 6 bits to, 3 bits promotion (0 = none,
/// otherwise kind index + 1). Two moves are equal only when all three parts match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "MoveRepr", into = "MoveRepr")]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Option<PieceKind>) -> Self {
        let promo = match promotion {
            Some(kind) => kind.index() as u16 + 1,
            None => 0,
        };
        Move((from.index() as u16) | ((to.index() as u16) << 6) | (promo << 12))
    }

    /// Creates a move without promotion.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, None)
    }

    /// Creates a promoting move.
    #[inline]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self::new(from, to, Some(kind))
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the promotion kind carried by this move.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        match (self.0 >> 12) & 0x7 {
            0 => None,
            n => PieceKind::from_index(n as usize - 1),
        }
    }

    /// A null move (placeholder for unused move buffer slots, never legal).
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion() {
            Some(kind) => write!(f, "Move({} -> {} = {})", self.from(), self.to(), kind),
            None => write!(f, "Move({} -> {})", self.from(), self.to()),
        }
    }
}

/// Field-wise wire form of a [`Move`].
#[derive(Serialize, Deserialize)]
struct MoveRepr {
    from: Square,
    to: Square,
    #[serde(default)]
    promotion: Option<PieceKind>,
}

impl From<MoveRepr> for Move {
    fn from(repr: MoveRepr) -> Self {
        Move::new(repr.from, repr.to, repr.promotion)
    }
}

impl From<Move> for MoveRepr {
    fn from(m: Move) -> Self {
        MoveRepr {
            from: m.from(),
            to: m.to(),
            promotion: m.promotion(),
        }
    }
}
