//! Azul AI opponents
//!
//! Three difficulty tiers behind the [`Player`] trait:
//!
//! - Easy: [`RandomPlayer`] picks any legal move.
//! - Medium: [`HeuristicPlayer`] scores each move one ply deep.
//! - Hard: [`MinimaxPlayer`] runs alpha-beta over cloned games and scores
//!   leaves with [`evaluate_state`].

mod eval;
mod heuristic;
mod minimax;
mod player;
mod random;

pub use eval::{evaluate_state, wall_potential};
pub use heuristic::{score_move, HeuristicPlayer};
pub use minimax::{MinimaxPlayer, SearchConfig};
pub use player::{new_ai_player, Difficulty, ParseDifficultyError, Player};
pub use random::RandomPlayer;
