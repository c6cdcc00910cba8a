//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes of the legal move tree at a given
//! depth, which can be compared against known-correct values.

use crate::{rules, Game, GameError};
use chess_core::{Board, Color, Move};

/// Counts the number of leaf nodes at the given depth, starting with the
/// game's side to move.
pub fn perft(game: &Game, depth: u32) -> Result<u64, GameError> {
    count(game.board(), game.side_to_move(), depth)
}

/// Perft with divide: the node count below each root move.
/// Useful for pinpointing which move has an incorrect count.
pub fn perft_divide(game: &Game, depth: u32) -> Result<Vec<(Move, u64)>, GameError> {
    let side = game.side_to_move();
    let moves = rules::all_legal_moves(game.board(), side)?;
    let mut results = Vec::with_capacity(moves.len());

    for &mv in &moves {
        let nodes = if depth > 1 {
            let mut next = game.board().clone();
            rules::play(&mut next, mv);
            count(&next, side.opposite(), depth - 1)?
        } else {
            1
        };
        results.push((mv, nodes));
    }

    Ok(results)
}

fn count(board: &Board, side: Color, depth: u32) -> Result<u64, GameError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = rules::all_legal_moves(board, side)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        let mut next = board.clone();
        rules::play(&mut next, mv);
        nodes += count(&next, side.opposite(), depth - 1)?;
    }
    Ok(nodes)
}
