//! Command-line driver for the shogi engine.
//!
//! - `shogi perft` counts leaf nodes of the legal move tree
//! - `shogi selfplay` plays random legal moves for both sides

mod selfplay;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shogi_engine::movegen::perft::{perft, perft_divide};
use shogi_engine::Game;
use std::time::Instant;
use tracing::Level;

/// Shogi rules engine driver.
#[derive(Parser)]
#[command(name = "shogi")]
#[command(about = "Perft and random self-play for the shogi rules engine")]
struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count leaf nodes of the legal move tree
    Perft {
        /// Search depth in plies
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Print the node count below each root move
        #[arg(long)]
        divide: bool,

        /// USI moves to play from the starting position first
        #[arg(long, num_args = 1..)]
        moves: Vec<String>,
    },
    /// Play games of random legal moves
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,

        /// Stop a game unfinished after this many plies
        #[arg(long, default_value = "512")]
        max_plies: usize,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match args.command {
        Command::Perft {
            depth,
            divide,
            moves,
        } => run_perft(depth, divide, &moves),
        Command::Selfplay {
            games,
            max_plies,
            seed,
        } => selfplay::run(games, max_plies, seed),
    }
}

fn run_perft(depth: u32, divide: bool, moves: &[String]) -> anyhow::Result<()> {
    let mut game = Game::new();
    for usi in moves {
        game.make_move_usi(usi)
            .with_context(|| format!("cannot play {}", usi))?;
    }
    let position = game.position();
    tracing::info!(depth, plies = game.ply_count(), "running perft");

    let start = Instant::now();
    let nodes = if divide {
        let results = perft_divide(position, depth);
        for (mv, count) in &results {
            println!("{}: {}", mv, count);
        }
        println!();
        results.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(position, depth)
    };
    let elapsed = start.elapsed();

    println!("Nodes searched: {}", nodes);
    tracing::info!(
        nodes,
        elapsed_ms = elapsed.as_millis() as u64,
        nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64,
        "perft finished"
    );
    Ok(())
}
