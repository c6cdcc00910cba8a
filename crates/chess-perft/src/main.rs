//! Chess Perft - counts leaf nodes of the legal move tree.
//!
//! Compares the move generator against published node counts. Positions are
//! given as placement text (the board field of FEN); castling and en passant
//! are not modeled, so only counts that avoid them are comparable.

use anyhow::Context;
use chess_core::{Board, Color};
use chess_engine::{perft, perft_divide, Game, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Chess Perft - counts leaf nodes of the legal move tree.
#[derive(Parser)]
#[command(name = "chess-perft")]
#[command(about = "Counts leaf nodes of the legal move tree")]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value = "3")]
    depth: u32,

    /// Piece placement to start from
    #[arg(long, default_value = Board::STANDARD_PLACEMENT)]
    placement: String,

    /// Black moves first
    #[arg(long)]
    black: bool,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Path to a game config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let board = Board::from_placement(&args.placement)
        .with_context(|| format!("invalid placement: {}", args.placement))?;
    let mut game = Game::with_config(config);
    game.set_board(board)?;
    if args.black {
        game.set_side_to_move(Color::Black);
    }

    tracing::info!("Placement: {}", args.placement);
    tracing::info!("Side to move: {}", game.side_to_move());
    tracing::info!("Depth: {}", args.depth);
    println!("{}", game.board());

    let start = Instant::now();
    let nodes = if args.divide {
        let divided = perft_divide(&game, args.depth)?;
        for (mv, count) in &divided {
            println!("{:?}: {}", mv, count);
        }
        println!("Moves: {}", divided.len());
        divided.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(&game, args.depth)?
    };
    let elapsed = start.elapsed();

    println!("Nodes: {}", nodes);
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    if elapsed.as_secs_f64() > 0.0 {
        println!("NPS: {:.0}", nodes as f64 / elapsed.as_secs_f64());
    }

    Ok(())
}
