//! AI Arena - AI vs AI domino matches for comparing difficulty levels
//!
//! Every game is dealt from its own seed (base seed + game index), so a run
//! is reproducible and games can be played in parallel.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::io;

use domino_minimax::logging::setup_logging;
use domino_minimax::{deal_new_game, AiPlayer, Difficulty, DominoGame, GameConfig, Outcome, Seat};

#[derive(Parser, Debug)]
#[command(name = "ai-arena", about = "Run AI vs AI domino matches between two difficulty levels")]
struct Args {
    /// Difficulty of the first seat
    #[arg(long, value_enum, default_value = "hard")]
    first: Difficulty,

    /// Difficulty of the second seat
    #[arg(long, value_enum, default_value = "easy")]
    second: Difficulty,

    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Base RNG seed; game i uses seed + i
    #[arg(short = 'r', long, default_value_t = 2025)]
    seed: u64,

    /// Highest face value in the set
    #[arg(long, default_value_t = 6)]
    max_dots: u8,

    /// Tiles dealt to each player
    #[arg(long, default_value_t = 7)]
    hand_size: usize,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Fallback log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Default, Serialize)]
struct ArenaSummary {
    first: Difficulty,
    second: Difficulty,
    games: usize,
    first_wins: usize,
    second_wins: usize,
    dominoes: usize,
    locked: usize,
}

fn play_one(args: &Args, index: usize) -> domino_minimax::Result<Outcome> {
    let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(index as u64));
    let config = GameConfig {
        max_dots: args.max_dots,
        hand_size: args.hand_size,
    };
    let mut deal = deal_new_game(&config, &mut rng)?;
    let second_hand = deal.hands.pop().unwrap_or_default();
    let first_hand = deal.hands.pop().unwrap_or_default();

    let first = AiPlayer::new(args.first, StdRng::seed_from_u64(rng.random()));
    let second = AiPlayer::new(args.second, StdRng::seed_from_u64(rng.random()));

    let mut game = DominoGame::new(
        [
            Seat::new(format!("First ({})", args.first), first_hand, Box::new(first)),
            Seat::new(format!("Second ({})", args.second), second_hand, Box::new(second)),
        ],
        deal.stock,
    );

    let outcome = game.play(&mut io::sink())?;
    log::debug!("game {} -> {:?}", index, outcome);
    Ok(outcome)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logger = setup_logging(&args.log_level, None)?;

    log::info!("🎲 AI Arena: {} vs {}", args.first, args.second);
    log::info!("   Games: {}, Seed: {}", args.games, args.seed);

    let outcomes = (0..args.games)
        .into_par_iter()
        .map(|index| play_one(&args, index))
        .collect::<domino_minimax::Result<Vec<_>>>()?;

    let mut summary = ArenaSummary {
        first: args.first,
        second: args.second,
        games: outcomes.len(),
        ..Default::default()
    };
    for outcome in &outcomes {
        match outcome.winner() {
            0 => summary.first_wins += 1,
            _ => summary.second_wins += 1,
        }
        match outcome {
            Outcome::Domino { .. } => summary.dominoes += 1,
            Outcome::Locked { .. } => summary.locked += 1,
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        log::info!("📊 Results over {} games", summary.games);
        println!(
            "{} (first):  {} wins ({:.1}%)",
            args.first,
            summary.first_wins,
            percent(summary.first_wins, summary.games)
        );
        println!(
            "{} (second): {} wins ({:.1}%)",
            args.second,
            summary.second_wins,
            percent(summary.second_wins, summary.games)
        );
        println!("Domino finishes: {}, locked games: {}", summary.dominoes, summary.locked);
    }

    Ok(())
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
