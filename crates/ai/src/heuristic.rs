//! Medium tier: score each legal move once and play the best

use azul_engine::{wall_column, DraftDestination, DraftSource, Game, Move, PlayerBoard, BOARD_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::Player;

const LINE_COMPLETE_BONUS: i32 = 50;
const LINE_SIZE_BONUS: i32 = 10;
const OVERFLOW_PENALTY: i32 = 15;
const LINE_INDEX_PREFERENCE: i32 = 5;
const FLOOR_MOVE_PENALTY: i32 = -30;
const EARLY_MARKER_PENALTY: i32 = -20;
/// Center sizes below this make claiming the marker not worth it
const EARLY_MARKER_CENTER_SIZE: usize = 5;

const ROW_PROGRESS: i32 = 10;
const COLUMN_PROGRESS: i32 = 15;
const COLOR_PROGRESS: i32 = 20;
/// Occupied cells from which a row/column/color counts as "close"
const PROGRESS_THRESHOLD: usize = 3;

/// Heuristic value of `mv` for the current player
pub fn score_move(game: &Game, mv: &Move) -> i32 {
    let board = game.current_board();
    let mut score = 0;

    match mv.dest {
        DraftDestination::PatternLine(line) => {
            let pattern_line = &board.pattern_lines[line];
            let needed = pattern_line.space() as i32;
            let taking = game.tiles_in_source(mv.source, mv.color) as i32;

            if taking >= needed {
                score += LINE_COMPLETE_BONUS + (line as i32 + 1) * LINE_SIZE_BONUS;
            }
            let overflow = taking - needed;
            if overflow > 0 {
                score -= overflow * OVERFLOW_PENALTY;
            }
            score += line as i32 * LINE_INDEX_PREFERENCE;
        }
        DraftDestination::Floor => score += FLOOR_MOVE_PENALTY,
    }

    if mv.source == DraftSource::Center
        && game.center.has_first_player_marker
        && game.center.tiles.len() < EARLY_MARKER_CENTER_SIZE
    {
        score += EARLY_MARKER_PENALTY;
    }

    score + board_progress(board, mv)
}

/// Reward lines feeding a wall row, column or color that is already 3+ full
fn board_progress(board: &PlayerBoard, mv: &Move) -> i32 {
    let DraftDestination::PatternLine(row) = mv.dest else {
        return 0;
    };
    debug_assert!(row < BOARD_SIZE);
    let col = wall_column(row, mv.color);

    let mut score = 0;
    if board.row_count(row) >= PROGRESS_THRESHOLD {
        score += ROW_PROGRESS;
    }
    if board.column_count(col) >= PROGRESS_THRESHOLD {
        score += COLUMN_PROGRESS;
    }
    if board.color_count(mv.color) >= PROGRESS_THRESHOLD {
        score += COLOR_PROGRESS;
    }
    score
}

/// Medium tier; ties between equally scored moves are broken at random
#[derive(Clone, Debug)]
pub struct HeuristicPlayer {
    rng: StdRng,
}

impl HeuristicPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// All moves sharing the top score
    pub fn best_moves(game: &Game, moves: &[Move]) -> Vec<Move> {
        let mut best_score = i32::MIN;
        let mut best = Vec::new();

        for mv in moves {
            let score = score_move(game, mv);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(*mv);
            } else if score == best_score {
                best.push(*mv);
            }
        }
        best
    }
}

impl Player for HeuristicPlayer {
    fn choose_move(&mut self, game: &Game, moves: &[Move]) -> Option<Move> {
        let best = Self::best_moves(game, moves);
        if best.is_empty() {
            return None;
        }
        Some(best[self.rng.random_range(0..best.len())])
    }

    fn name(&self) -> &str {
        "AI (Medium)"
    }
}
