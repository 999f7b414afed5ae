//! Hard tier: depth-limited minimax with alpha-beta pruning
//!
//! Every branch runs on a deep clone of the game, so the caller's game is
//! never touched. Nodes where `seat` is to move maximize, all other seats
//! minimize. Leaves are scored with [`evaluate_state`].

use azul_engine::{Game, Move};
use log::{debug, trace};
use rayon::prelude::*;

use crate::eval::evaluate_state;
use crate::Player;

/// Search parameters for [`MinimaxPlayer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched in ordinary positions.
    pub depth: u32,

    /// Plies searched when the root has more than `wide_branching` moves.
    pub reduced_depth: u32,

    /// Move count above which `reduced_depth` applies.
    pub wide_branching: usize,

    /// Search root moves on the rayon pool. Each root child gets a full
    /// window, so the chosen move is the same as the sequential search.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            reduced_depth: 3,
            wide_branching: 20,
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    /// Depth to search for a root with `n_moves` legal moves
    pub fn depth_for(&self, n_moves: usize) -> u32 {
        if n_moves > self.wide_branching {
            self.reduced_depth
        } else {
            self.depth
        }
    }
}

#[derive(Clone, Debug)]
pub struct MinimaxPlayer {
    seat: usize,
    config: SearchConfig,
}

impl MinimaxPlayer {
    pub fn new(seat: usize) -> Self {
        Self::with_config(seat, SearchConfig::default())
    }

    pub fn with_config(seat: usize, config: SearchConfig) -> Self {
        Self { seat, config }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Best move for `self.seat` among `moves`, or None if there are none.
    pub fn search(&self, game: &Game, moves: &[Move]) -> Option<Move> {
        let first = *moves.first()?;
        let depth = self.config.depth_for(moves.len());
        debug!(
            "minimax: seat {} searching {} moves at depth {}",
            self.seat,
            moves.len(),
            depth
        );

        let best = if self.config.parallel_root {
            self.search_root_parallel(game, moves, depth)
        } else {
            self.search_root(game, moves, depth)
        };

        Some(best.map_or(first, |(mv, _)| mv))
    }

    fn search_root(&self, game: &Game, moves: &[Move], depth: u32) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        let mut alpha = i32::MIN;

        for &mv in moves {
            let Some(child) = simulate(game, mv) else {
                continue;
            };
            let value = alpha_beta(&child, depth.saturating_sub(1), alpha, i32::MAX, self.seat);
            trace!("minimax: {mv} -> {value}");

            if best.map_or(true, |(_, b)| value > b) {
                best = Some((mv, value));
                alpha = alpha.max(value);
            }
        }
        best
    }

    fn search_root_parallel(&self, game: &Game, moves: &[Move], depth: u32) -> Option<(Move, i32)> {
        let scored: Vec<(usize, Move, i32)> = moves
            .par_iter()
            .enumerate()
            .filter_map(|(i, &mv)| {
                let child = simulate(game, mv)?;
                let value = alpha_beta(
                    &child,
                    depth.saturating_sub(1),
                    i32::MIN,
                    i32::MAX,
                    self.seat,
                );
                Some((i, mv, value))
            })
            .collect();

        // Highest value wins; among equals the earliest move, as in the
        // sequential search.
        scored
            .into_iter()
            .max_by(|a, b| a.2.cmp(&b.2).then(b.0.cmp(&a.0)))
            .map(|(_, mv, value)| (mv, value))
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, game: &Game, moves: &[Move]) -> Option<Move> {
        self.search(game, moves)
    }

    fn name(&self) -> &str {
        "AI (Hard)"
    }
}

/// Deep copy of `game` with `mv` applied, or None if the move is rejected.
fn simulate(game: &Game, mv: Move) -> Option<Game> {
    let mut child = game.clone();
    child.apply_move(mv).ok()?;
    Some(child)
}

fn alpha_beta(game: &Game, depth: u32, mut alpha: i32, mut beta: i32, seat: usize) -> i32 {
    if depth == 0 || game.is_game_over() {
        return evaluate_state(game, seat);
    }

    let moves = game.valid_moves();
    let maximizing = game.current_player == seat;
    let mut best: Option<i32> = None;

    for mv in moves {
        let Some(child) = simulate(game, mv) else {
            continue;
        };
        let value = alpha_beta(&child, depth - 1, alpha, beta, seat);

        if maximizing {
            best = Some(best.map_or(value, |b| b.max(value)));
            alpha = alpha.max(value);
        } else {
            best = Some(best.map_or(value, |b| b.min(value)));
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    // No child could be played: score the node as it stands.
    best.unwrap_or_else(|| evaluate_state(game, seat))
}
