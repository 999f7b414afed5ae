//! Static evaluation used at the leaves of the minimax search

use azul_engine::{Game, PlayerBoard, ALL_COLORS, BOARD_SIZE};

const OWN_SCORE_WEIGHT: i32 = 10;
const LINE_PROGRESS_WEIGHT: usize = 5;
const WALL_POTENTIAL_WEIGHT: i32 = 2;
const OPPONENT_SCORE_WEIGHT: i32 = 8;
const FLOOR_TILE_PENALTY: i32 = 5;

/// (reward at 4+ cells, reward at 3 cells)
const ROW_TIERS: (i32, i32) = (10, 5);
const COLUMN_TIERS: (i32, i32) = (20, 10);
const COLOR_TIERS: (i32, i32) = (25, 12);

fn tiered(filled: usize, (four, three): (i32, i32)) -> i32 {
    match filled {
        4.. => four,
        3 => three,
        _ => 0,
    }
}

/// Value of `game` from `seat`'s point of view
pub fn evaluate_state(game: &Game, seat: usize) -> i32 {
    let me = &game.players[seat];
    let mut score = me.score * OWN_SCORE_WEIGHT;

    for (row, line) in me.pattern_lines.iter().enumerate() {
        if line.filled > 0 {
            score += (line.filled * (row + 1) * LINE_PROGRESS_WEIGHT / line.capacity) as i32;
        }
    }

    score += wall_potential(me) * WALL_POTENTIAL_WEIGHT;

    for (i, other) in game.players.iter().enumerate() {
        if i != seat {
            score -= other.score * OPPONENT_SCORE_WEIGHT;
        }
    }

    score - me.floor.len() as i32 * FLOOR_TILE_PENALTY
}

/// Rough worth of the end-game bonuses a wall is heading for
pub fn wall_potential(board: &PlayerBoard) -> i32 {
    let rows: i32 = (0..BOARD_SIZE)
        .map(|row| tiered(board.row_count(row), ROW_TIERS))
        .sum();
    let cols: i32 = (0..BOARD_SIZE)
        .map(|col| tiered(board.column_count(col), COLUMN_TIERS))
        .sum();
    let colors: i32 = ALL_COLORS
        .iter()
        .map(|&color| tiered(board.color_count(color), COLOR_TIERS))
        .sum();
    rows + cols + colors
}
