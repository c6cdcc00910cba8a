//! Game management: the live board plus turn order.
//!
//! The [`Game`] struct owns exactly one board and the side to move. Queries
//! recompute from that state on every call; nothing about check, checkmate
//! or stalemate is stored.

use crate::config::{BoardReplacement, GameConfig};
use crate::rules::{self, GameStatus};
use crate::{GameError, MoveList};
use chess_core::{Board, Color, Move, Square};

/// A chess game: the board and whose turn it is.
///
/// Every board handed in or out is an independent value; simulation works on
/// its own copy and never touches the live board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// The live board.
    board: Board,
    /// The side allowed to make the next move.
    side_to_move: Color,
    config: GameConfig,
    /// Set once [`set_board`](Self::set_board) has succeeded.
    board_replaced: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Creates a new game in the starting position with the given settings.
    pub fn with_config(config: GameConfig) -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            config,
            board_replaced: false,
        }
    }

    /// Creates a game from an externally constructed board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            config: GameConfig::default(),
            board_replaced: false,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board wholesale.
    ///
    /// Under [`BoardReplacement::Once`] only the first call succeeds.
    pub fn set_board(&mut self, board: Board) -> Result<(), GameError> {
        if self.board_replaced && self.config.board_replacement == BoardReplacement::Once {
            tracing::debug!("refused to replace the board a second time");
            return Err(GameError::InvalidBoardReplacement);
        }
        tracing::debug!(placement = %board.to_placement(), "board replaced");
        self.board = board;
        self.board_replaced = true;
        Ok(())
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hands the move to `color`, e.g. after loading a position.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Returns the settings this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the legal moves of the piece on `square`, regardless of whose
    /// turn it is. Empty when the square is empty.
    pub fn legal_moves(&self, square: Square) -> Result<MoveList, GameError> {
        rules::legal_moves(&self.board, square)
    }

    /// Returns every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Result<Vec<Move>, GameError> {
        rules::all_legal_moves(&self.board, self.side_to_move)
    }

    /// Makes a move.
    ///
    /// The move must be one of [`legal_moves`](Self::legal_moves) for its
    /// origin and the piece there must belong to the side to move. On success
    /// the turn passes to the other side; on failure nothing changes.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.legal_moves(mv.from())?.contains(&mv) {
            tracing::debug!(?mv, "rejected illegal move");
            return Err(GameError::IllegalMove(mv));
        }

        let piece = self
            .board
            .get(mv.from())
            .ok_or(GameError::IllegalMove(mv))?;
        if piece.color != self.side_to_move {
            tracing::debug!(?mv, side_to_move = %self.side_to_move, "rejected move out of turn");
            return Err(GameError::WrongTurn {
                expected: self.side_to_move,
                found: piece.color,
            });
        }

        let captured = rules::play(&mut self.board, mv);
        self.side_to_move = self.side_to_move.opposite();
        tracing::debug!(?mv, ?captured, side_to_move = %self.side_to_move, "applied move");
        Ok(())
    }

    /// Returns true if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> Result<bool, GameError> {
        rules::is_in_check(&self.board, color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_in_checkmate(&self, color: Color) -> Result<bool, GameError> {
        rules::is_in_checkmate(&self.board, color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&self, color: Color) -> Result<bool, GameError> {
        rules::is_in_stalemate(&self.board, color)
    }

    /// Returns where `color` stands: normal, check, checkmate or stalemate.
    pub fn status(&self, color: Color) -> Result<GameStatus, GameError> {
        rules::status(&self.board, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Piece, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::normal(sq(from), sq(to))
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.board(), &Board::startpos());
        assert_eq!(game.is_in_check(Color::White), Ok(false));
        assert_eq!(game.all_legal_moves().unwrap().len(), 20);
    }

    #[test]
    fn moves_alternate_sides() {
        let mut game = Game::new();
        game.apply_move(mv("e2", "e4")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        game.apply_move(mv("e7", "e5")).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
        game.apply_move(mv("g1", "f3")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(
            game.board().get(sq("f3")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(game.board().get(sq("g1")), None);
    }

    #[test]
    fn wrong_turn_is_rejected() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(
            game.apply_move(mv("e7", "e5")),
            Err(GameError::WrongTurn {
                expected: Color::White,
                found: Color::Black
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn illegal_move_is_rejected() {
        let mut game = Game::new();
        let before = game.clone();
        let bad = mv("e2", "e5");
        assert_eq!(game.apply_move(bad), Err(GameError::IllegalMove(bad)));
        assert_eq!(game, before);

        // Empty origin.
        let empty = mv("e4", "e5");
        assert_eq!(game.apply_move(empty), Err(GameError::IllegalMove(empty)));
        assert_eq!(game, before);
    }

    #[test]
    fn illegal_check_precedes_turn_check() {
        // A black move that is geometrically impossible reports IllegalMove
        // even though it is also out of turn.
        let mut game = Game::new();
        let bad = mv("e7", "e4");
        assert_eq!(game.apply_move(bad), Err(GameError::IllegalMove(bad)));
    }

    #[test]
    fn capture_replaces_occupant() {
        let mut game = Game::new();
        game.apply_move(mv("e2", "e4")).unwrap();
        game.apply_move(mv("d7", "d5")).unwrap();
        game.apply_move(mv("e4", "d5")).unwrap();
        assert_eq!(game.board().piece_count(), 31);
        assert_eq!(
            game.board().get(sq("d5")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
    }

    #[test]
    fn promotion_uses_chosen_kind() {
        let board = Board::from_placement("4k3/1P6/8/8/8/8/8/4K3").unwrap();
        let mut game = Game::from_board(board, Color::White);

        let under = Move::promoting(sq("b7"), sq("b8"), PieceKind::Knight);
        game.apply_move(under).unwrap();
        assert_eq!(
            game.board().get(sq("b8")),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(game.board().get(sq("b7")), None);
    }

    #[test]
    fn promotion_without_kind_is_illegal() {
        let board = Board::from_placement("4k3/1P6/8/8/8/8/8/4K3").unwrap();
        let mut game = Game::from_board(board, Color::White);
        let bare = mv("b7", "b8");
        assert_eq!(game.apply_move(bare), Err(GameError::IllegalMove(bare)));
        let to_king = Move::promoting(sq("b7"), sq("b8"), PieceKind::King);
        assert_eq!(game.apply_move(to_king), Err(GameError::IllegalMove(to_king)));
    }

    #[test]
    fn moving_into_check_is_illegal() {
        let board = Board::from_placement("4k3/8/8/8/8/8/3r4/4K3").unwrap();
        let mut game = Game::from_board(board, Color::White);
        let into = mv("e1", "e2");
        assert_eq!(game.apply_move(into), Err(GameError::IllegalMove(into)));
        game.apply_move(mv("e1", "d2")).unwrap();
        assert_eq!(game.board().piece_count(), 2);
    }

    #[test]
    fn set_side_to_move() {
        let mut game = Game::new();
        game.set_side_to_move(Color::Black);
        assert_eq!(game.side_to_move(), Color::Black);
        game.apply_move(mv("b8", "c6")).unwrap();
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn board_replacement_always_by_default() {
        let mut game = Game::new();
        game.set_board(Board::empty()).unwrap();
        assert_eq!(game.board(), &Board::empty());
        game.set_board(Board::startpos()).unwrap();
        assert_eq!(game.board(), &Board::startpos());
    }

    #[test]
    fn board_replacement_once() {
        let config = GameConfig {
            board_replacement: BoardReplacement::Once,
        };
        let mut game = Game::with_config(config);
        let loaded = Board::from_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        game.set_board(loaded.clone()).unwrap();
        assert_eq!(
            game.set_board(Board::startpos()),
            Err(GameError::InvalidBoardReplacement)
        );
        assert_eq!(game.board(), &loaded);
        assert_eq!(game.config(), &config);
    }

    #[test]
    fn returned_board_is_a_snapshot() {
        let mut game = Game::new();
        let snapshot = game.board().clone();
        game.apply_move(mv("d2", "d4")).unwrap();
        assert_eq!(snapshot, Board::startpos());
        assert_ne!(game.board(), &snapshot);
    }

    #[test]
    fn status_of_fresh_game() {
        let game = Game::new();
        assert_eq!(game.status(Color::White), Ok(GameStatus::Normal));
        assert_eq!(game.is_in_checkmate(Color::Black), Ok(false));
        assert_eq!(game.is_in_stalemate(Color::Black), Ok(false));
    }
}
