//! Piece placement text: the board field of FEN.
//!
//! Ranks run from 8 down to 1 separated by `/`; pieces use their diagram
//! symbols and digits count empty squares, e.g.
//! `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.

use crate::{Board, File, Piece, Rank, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidSquareCount { rank: u8, squares: u32 },
}

impl Board {
    /// Placement of the standard starting position.
    pub const STANDARD_PLACEMENT: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Builds a board from a placement string.
    pub fn from_placement(placement: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::InvalidRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank, text) in Rank::ALL.iter().rev().zip(ranks) {
            let mut squares = 0u32;
            for c in text.chars() {
                if let Some(digit) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    squares += digit;
                } else if let Some(piece) = Piece::from_symbol(c) {
                    if let Some(file) = File::from_index(squares as u8) {
                        board.place(Square::new(file, *rank), piece);
                    }
                    squares += 1;
                } else {
                    return Err(PlacementError::InvalidCharacter {
                        character: c,
                        rank: rank.number(),
                    });
                }
            }
            if squares != 8 {
                return Err(PlacementError::InvalidSquareCount {
                    rank: rank.number(),
                    squares,
                });
            }
        }

        Ok(board)
    }

    /// Converts the board to a placement string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for rank in Rank::ALL.iter().rev() {
            let mut empty_count = 0;
            for file in File::ALL {
                match self.get(Square::new(file, *rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        out.push(piece.symbol());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push_str(&empty_count.to_string());
            }
            if *rank != Rank::R1 {
                out.push('/');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    #[test]
    fn standard_placement_matches_startpos() {
        let board = Board::from_placement(Board::STANDARD_PLACEMENT).unwrap();
        assert_eq!(board, Board::startpos());
        assert_eq!(Board::startpos().to_placement(), Board::STANDARD_PLACEMENT);
    }

    #[test]
    fn custom_placement_roundtrip() {
        let placement = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.to_placement(), placement);
        assert_eq!(
            board.get(Square::from_algebraic("f3").unwrap()),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn empty_board_placement() {
        assert_eq!(Board::empty().to_placement(), "8/8/8/8/8/8/8/8");
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8/8").unwrap(),
            Board::empty()
        );
    }

    #[test]
    fn invalid_rank_count() {
        assert_eq!(
            Board::from_placement("8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidRankCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidCharacter {
                character: 'X',
                rank: 2
            })
        );
        // A zero is not a run length.
        assert!(matches!(
            Board::from_placement("08/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidCharacter { character: '0', .. })
        ));
    }

    #[test]
    fn wrong_square_count() {
        assert_eq!(
            Board::from_placement("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::InvalidSquareCount {
                rank: 8,
                squares: 9
            })
        );
        assert_eq!(
            Board::from_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::InvalidSquareCount {
                rank: 8,
                squares: 7
            })
        );
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidRankCount(3);
        assert!(err.to_string().contains('3'));
        let err = PlacementError::InvalidCharacter {
            character: 'x',
            rank: 5,
        };
        assert!(err.to_string().contains('x'));
    }
}
