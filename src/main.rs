//! Play Azul in the terminal against the AI, or watch the AI play itself
//!
//! Usage: cargo run -- [--players 3] [--ai hard] [--human 0] [--seed 42]

use std::io::{self, Write};

use anyhow::{ensure, Context};
use clap::Parser;
use flexi_logger::Logger;
use log::{info, warn};
use rand::Rng;

use azul::ai::{new_ai_player, Difficulty, Player, SearchConfig};
use azul::display::{format_move, render_game, render_game_over, BOLD, DIM, RESET};
use azul::human::HumanPlayer;
use azul::{Game, StepOutcome, MAX_PLAYERS, MIN_PLAYERS};

/// Terminal Azul
#[derive(Parser, Debug)]
#[command(name = "azul")]
#[command(about = "Play Azul against tiered AI opponents", long_about = None)]
struct Args {
    /// Number of players (clamped to 2-4)
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// AI difficulty: easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Medium)]
    ai: Difficulty,

    /// Seat of the human player (1-based); 0 for AI vs AI
    #[arg(long, default_value_t = 1)]
    human: usize,

    /// Seed for the bag and the AI (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Search root moves in parallel (hard AI)
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

const HUMAN_NAME: &str = "You";

/// One player per seat plus their display names.
///
/// AI seats get seeds derived from `seed`; the human draws the table with
/// everyone's names before each prompt.
fn seat_players(
    num_players: usize,
    human_seat: Option<usize>,
    difficulty: Difficulty,
    seed: u64,
    config: &SearchConfig,
) -> (Vec<Box<dyn Player>>, Vec<String>) {
    let ais: Vec<Option<Box<dyn Player>>> = (0..num_players)
        .map(|seat| {
            (Some(seat) != human_seat).then(|| {
                let ai_seed = seed.wrapping_add(seat as u64 + 1);
                new_ai_player(difficulty, seat, ai_seed, config.clone()) as Box<dyn Player>
            })
        })
        .collect();
    let names: Vec<String> = ais
        .iter()
        .map(|ai| ai.as_ref().map_or(HUMAN_NAME, |p| p.name()).to_string())
        .collect();

    let players = ais
        .into_iter()
        .map(|ai| {
            ai.unwrap_or_else(|| {
                let human = HumanPlayer::stdin(HUMAN_NAME).with_seat_names(names.clone());
                Box::new(human) as Box<dyn Player>
            })
        })
        .collect();
    (players, names)
}

fn wait_for_enter() -> anyhow::Result<()> {
    print!("{DIM}Press Enter to continue...{RESET}");
    io::stdout().flush().context("flushing stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let args = Args::parse();
    let num_players = args.players.clamp(MIN_PLAYERS, MAX_PLAYERS);
    if num_players != args.players {
        warn!("--players {} clamped to {}", args.players, num_players);
    }
    ensure!(
        args.human <= num_players,
        "--human must be between 0 and {num_players}"
    );
    let human_seat = args.human.checked_sub(1);

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("{BOLD}Azul{RESET}  seed {seed}  ({} players, {} AI)", num_players, args.ai);

    let config = SearchConfig {
        parallel_root: args.parallel,
        ..SearchConfig::default()
    };

    let mut game = Game::new(num_players, seed);
    let (mut players, names) = seat_players(num_players, human_seat, args.ai, seed, &config);

    while !game.is_game_over() {
        let moves = game.valid_moves();
        if moves.is_empty() {
            print!("{}", render_game(&game, &names));
            println!("No valid moves available!");
            break;
        }

        let seat = game.current_player;
        let is_human = Some(seat) == human_seat;
        if !is_human {
            print!("{}", render_game(&game, &names));
            println!("\n{DIM}{} is thinking...{RESET}", names[seat]);
        }

        let Some(mv) = players[seat].choose_move(&game, &moves) else {
            println!("\nThanks for playing!");
            return Ok(());
        };

        if !is_human {
            println!("{} chose: {}", names[seat], format_move(&mv));
            if human_seat.is_some() {
                wait_for_enter()?;
            }
        }

        match game.apply_move(mv) {
            Ok(StepOutcome::RoundEnded { round }) => {
                info!("round {round} begins");
                println!("\n{BOLD}Round {round} begins{RESET}");
            }
            Ok(_) => {}
            Err(e) => {
                warn!("{} played an illegal move: {e}", names[seat]);
                println!("Error: {e}");
            }
        }
    }

    print!("{}", render_game(&game, &names));
    print!("{}", render_game_over(&game, &names));
    Ok(())
}
