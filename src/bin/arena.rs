//! Pit two AI tiers against each other over many seeded games
//!
//! Usage: cargo run --release --bin arena -- --first hard --second medium --games 50
//!
//! Seats alternate between the two tiers, and every other game swaps which
//! tier sits first, so neither side keeps the opening advantage.

use anyhow::{anyhow, Context};
use clap::Parser;
use flexi_logger::Logger;
use log::debug;
use rayon::prelude::*;

use azul::ai::{new_ai_player, Difficulty, Player, SearchConfig};
use azul::{Game, MAX_PLAYERS, MIN_PLAYERS};

/// Batch AI-vs-AI evaluation
#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Play two AI difficulty tiers against each other", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// First tier
    #[arg(long, default_value_t = Difficulty::Hard)]
    first: Difficulty,

    /// Second tier
    #[arg(long, default_value_t = Difficulty::Medium)]
    second: Difficulty,

    /// Players per game (clamped to 2-4)
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Base seed; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Outcome of one game, from the point of view of the two tiers
#[derive(Debug)]
struct GameResult {
    /// Sum of final scores per tier
    scores: [i32; 2],
    /// Seats per tier
    seats: [usize; 2],
    /// Winning tier, None on a tie
    winner: Option<usize>,
    moves: usize,
}

fn tier_of(seat: usize, swapped: bool) -> usize {
    (seat + usize::from(swapped)) % 2
}

fn play_game(
    tiers: [Difficulty; 2],
    num_players: usize,
    seed: u64,
    swapped: bool,
) -> anyhow::Result<GameResult> {
    let mut game = Game::new(num_players, seed);
    let mut players: Vec<Box<dyn Player + Send>> = (0..num_players)
        .map(|seat| {
            let tier = tiers[tier_of(seat, swapped)];
            new_ai_player(tier, seat, seed.wrapping_add(seat as u64 + 1), SearchConfig::default())
        })
        .collect();

    let mut moves_played = 0;
    while !game.is_game_over() {
        let moves = game.valid_moves();
        if moves.is_empty() {
            break;
        }
        let seat = game.current_player;
        let mv = players[seat]
            .choose_move(&game, &moves)
            .ok_or_else(|| anyhow!("{} gave up in game {seed}", players[seat].name()))?;
        game.apply_move(mv)
            .with_context(|| format!("seat {seat} played {mv} in game {seed}"))?;
        moves_played += 1;
    }

    let mut scores = [0; 2];
    let mut seats = [0; 2];
    for (seat, board) in game.players.iter().enumerate() {
        let tier = tier_of(seat, swapped);
        scores[tier] += board.score;
        seats[tier] += 1;
    }
    let winner = game.winner().map(|seat| tier_of(seat, swapped));
    debug!("game {seed}: scores {scores:?}, winner {winner:?}, {moves_played} moves");

    Ok(GameResult {
        scores,
        seats,
        winner,
        moves: moves_played,
    })
}

fn main() -> anyhow::Result<()> {
    Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let args = Args::parse();
    let num_players = args.players.clamp(MIN_PLAYERS, MAX_PLAYERS);
    let tiers = [args.first, args.second];

    eprintln!("Arena Configuration:");
    eprintln!("  Games: {}", args.games);
    eprintln!("  Players per game: {}", num_players);
    eprintln!("  First tier: {}", tiers[0]);
    eprintln!("  Second tier: {}", tiers[1]);
    eprintln!("  Base seed: {}", args.seed);
    eprintln!();

    // Each game owns its state and players, so they run independently.
    let results: Vec<GameResult> = (0..args.games)
        .into_par_iter()
        .map(|i| play_game(tiers, num_players, args.seed.wrapping_add(i as u64), i % 2 == 1))
        .collect::<anyhow::Result<_>>()?;

    let mut wins = [0usize; 2];
    let mut ties = 0usize;
    let mut score_sum = [0i64; 2];
    let mut seat_games = [0usize; 2];
    let mut total_moves = 0usize;
    for result in &results {
        match result.winner {
            Some(tier) => wins[tier] += 1,
            None => ties += 1,
        }
        for tier in 0..2 {
            score_sum[tier] += i64::from(result.scores[tier]);
            seat_games[tier] += result.seats[tier];
        }
        total_moves += result.moves;
    }

    println!("Results over {} games:", results.len());
    for tier in 0..2 {
        let avg = if seat_games[tier] == 0 {
            0.0
        } else {
            score_sum[tier] as f64 / seat_games[tier] as f64
        };
        println!(
            "  {:<8} wins {:>4}   avg score {:>6.1}",
            tiers[tier].label(),
            wins[tier],
            avg
        );
    }
    println!("  ties     {:>9}", ties);
    if !results.is_empty() {
        println!("  avg moves/game {:.1}", total_moves as f64 / results.len() as f64);
    }

    Ok(())
}
