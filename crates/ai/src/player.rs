//! Player API shared by humans and the AI tiers

use std::fmt;
use std::str::FromStr;

use azul_engine::{Game, Move};
use thiserror::Error;

use crate::{HeuristicPlayer, MinimaxPlayer, RandomPlayer, SearchConfig};

/// Anything that can take a turn: a tiered AI or a human at the terminal.
pub trait Player {
    /// Pick one of `moves` (the legal moves of `game.current_player`).
    ///
    /// Returns None only when `moves` is empty or the player gives up.
    fn choose_move(&mut self, game: &Game, moves: &[Move]) -> Option<Move>;

    /// Display name
    fn name(&self) -> &str;
}

/// AI strength
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Uniformly random legal moves
    Easy,
    /// One-ply heuristic
    #[default]
    Medium,
    /// Minimax with alpha-beta pruning
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Build the AI for `difficulty` sitting at `seat`.
///
/// `seed` drives the random choices of the Easy and Medium tiers; the Hard
/// tier is deterministic.
pub fn new_ai_player(
    difficulty: Difficulty,
    seat: usize,
    seed: u64,
    config: SearchConfig,
) -> Box<dyn Player + Send> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomPlayer::new(seed)),
        Difficulty::Medium => Box::new(HeuristicPlayer::new(seed)),
        Difficulty::Hard => Box::new(MinimaxPlayer::with_config(seat, config)),
    }
}
