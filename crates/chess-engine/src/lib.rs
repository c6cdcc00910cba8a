//! Rules engine for standard chess.
//!
//! This crate provides:
//! - [`Game`] - the live board plus turn order, and move application
//! - [`movegen`] - pseudo-legal move generation per piece kind
//! - [`rules`] - the self-check filter and check, checkmate, stalemate
//! - [`perft`] - leaf counting for validating the move generator
//!
//! Castling, en passant and draw rules beyond stalemate are not modeled.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Square};
//! use chess_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! assert_eq!(game.all_legal_moves().unwrap().len(), 20);
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! game.apply_move(Move::normal(e2, e4)).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.status(Color::Black).unwrap(), GameStatus::Normal);
//! ```

mod config;
mod error;
mod game;
pub mod movegen;
mod perft;
pub mod rules;

pub use config::{BoardReplacement, ConfigError, GameConfig};
pub use error::GameError;
pub use game::Game;
pub use movegen::{pseudo_legal_moves, MoveList};
pub use perft::{perft, perft_divide};
pub use rules::GameStatus;
