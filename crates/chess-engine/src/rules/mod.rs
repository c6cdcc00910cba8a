//! Board-level rules: the self-check filter and the check, checkmate and
//! stalemate predicates.
//!
//! These functions are pure over a [`Board`](chess_core::Board) and take the
//! side to evaluate explicitly. [`Game`](crate::Game) wraps them with turn
//! order; [`perft`](crate::perft) drives them directly.

mod check;
mod legality;

pub use check::{
    has_legal_moves, is_in_check, is_in_checkmate, is_in_stalemate, king_square, status,
};
pub use legality::{all_legal_moves, legal_moves, play};

use serde::{Deserialize, Serialize};

/// Where a side stands, combining "in check" with "has a legal move".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Not in check, at least one legal move.
    Normal,
    /// In check, at least one legal move.
    Check,
    /// In check with no legal move.
    Checkmate,
    /// Not in check with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Builds the status from its two inputs.
    pub const fn from_parts(in_check: bool, has_moves: bool) -> Self {
        match (in_check, has_moves) {
            (false, true) => GameStatus::Normal,
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Stalemate,
        }
    }

    /// Returns true if the side has no legal move.
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_parts() {
        assert_eq!(GameStatus::from_parts(false, true), GameStatus::Normal);
        assert_eq!(GameStatus::from_parts(true, true), GameStatus::Check);
        assert_eq!(GameStatus::from_parts(true, false), GameStatus::Checkmate);
        assert_eq!(GameStatus::from_parts(false, false), GameStatus::Stalemate);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Normal.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Checkmate.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
    }

    #[test]
    fn status_wire_form() {
        let json = serde_json::to_string(&GameStatus::Checkmate).unwrap();
        assert_eq!(json, r#""Checkmate""#);
        let parsed: GameStatus = serde_json::from_str(r#""Stalemate""#).unwrap();
        assert_eq!(parsed, GameStatus::Stalemate);
    }
}
