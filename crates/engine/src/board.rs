//! Player board: pattern lines, wall, floor line and score

use smallvec::SmallVec;

use crate::moves::DraftDestination;
use crate::tiles::{Color, Token, ALL_COLORS, TILE_COLORS};

pub const BOARD_SIZE: usize = 5;
pub const FLOOR_CAPACITY: usize = 7;

/// Floor penalties by slot (fixed table). Slots past the end cost nothing.
pub const FLOOR_PENALTY: [i32; FLOOR_CAPACITY] = [-1, -1, -2, -2, -2, -3, -3];

/// End-of-game bonuses
pub const ROW_BONUS: i32 = 2;
pub const COLUMN_BONUS: i32 = 7;
pub const COLOR_BONUS: i32 = 10;

/// Wall pattern: WALL_PATTERN[row][col] = color allowed at that cell.
/// Each row is the previous one shifted right by one: color index (col - row) mod 5.
pub const WALL_PATTERN: [[Color; BOARD_SIZE]; BOARD_SIZE] = [
    [Color::Blue, Color::Yellow, Color::Red, Color::Black, Color::White],
    [Color::White, Color::Blue, Color::Yellow, Color::Red, Color::Black],
    [Color::Black, Color::White, Color::Blue, Color::Yellow, Color::Red],
    [Color::Red, Color::Black, Color::White, Color::Blue, Color::Yellow],
    [Color::Yellow, Color::Red, Color::Black, Color::White, Color::Blue],
];

/// Wall occupancy; the color of an occupied cell is given by WALL_PATTERN
pub type Wall = [[bool; BOARD_SIZE]; BOARD_SIZE];

/// Column where `color` lands in `row`
pub fn wall_column(row: usize, color: Color) -> usize {
    let col = (color.index() + row) % BOARD_SIZE;
    debug_assert_eq!(WALL_PATTERN[row][col], color);
    col
}

/// Points for a tile just placed at (row, col), counting it as occupied
pub fn score_placement(wall: &Wall, row: usize, col: usize) -> i32 {
    let left = (0..col).rev().take_while(|&c| wall[row][c]).count();
    let right = (col + 1..BOARD_SIZE).take_while(|&c| wall[row][c]).count();
    let up = (0..row).rev().take_while(|&r| wall[r][col]).count();
    let down = (row + 1..BOARD_SIZE).take_while(|&r| wall[r][col]).count();

    let horiz = 1 + left + right;
    let vert = 1 + up + down;

    if horiz == 1 && vert == 1 {
        return 1;
    }
    let h_score = if horiz > 1 { horiz } else { 0 };
    let v_score = if vert > 1 { vert } else { 0 };
    (h_score + v_score) as i32
}

/// Penalty for a floor line holding `len` tokens
pub fn floor_penalty(len: usize) -> i32 {
    FLOOR_PENALTY.iter().take(len).sum()
}

/// One staging row; capacity is row index + 1
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PatternLine {
    pub capacity: usize,
    pub color: Option<Color>, // None iff filled == 0
    pub filled: usize,
}

impl PatternLine {
    pub fn new(capacity: usize) -> Self {
        PatternLine {
            capacity,
            color: None,
            filled: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn space(&self) -> usize {
        self.capacity - self.filled
    }

    /// Line-local check; ignores the wall
    pub fn can_accept(&self, color: Color) -> bool {
        if self.is_full() {
            return false;
        }
        self.color.map_or(true, |c| c == color)
    }

    /// Add up to the remaining space; returns the overflow count
    fn add(&mut self, color: Color, count: usize) -> usize {
        if self.is_empty() {
            self.color = Some(color);
        }
        let placed = count.min(self.space());
        self.filled += placed;
        count - placed
    }

    fn clear(&mut self) {
        self.color = None;
        self.filled = 0;
    }
}

/// Complete state for one player
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerBoard {
    pub pattern_lines: [PatternLine; BOARD_SIZE],
    pub wall: Wall,
    pub floor: SmallVec<[Token; FLOOR_CAPACITY]>,
    /// Never negative: clamped after floor scoring
    pub score: i32,
}

impl Default for PlayerBoard {
    fn default() -> Self {
        PlayerBoard {
            pattern_lines: std::array::from_fn(|row| PatternLine::new(row + 1)),
            wall: [[false; BOARD_SIZE]; BOARD_SIZE],
            floor: SmallVec::new(),
            score: 0,
        }
    }
}

impl PlayerBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Can `color` go on pattern line `line`?
    ///
    /// Also false when the wall already holds `color` in that row, even if
    /// the line itself has room.
    pub fn can_place(&self, line: usize, color: Color) -> bool {
        let Some(pattern_line) = self.pattern_lines.get(line) else {
            return false;
        };
        pattern_line.can_accept(color) && !self.wall[line][wall_column(line, color)]
    }

    /// Every legal destination for `color`. The floor is always included.
    pub fn valid_placements(&self, color: Color) -> Vec<DraftDestination> {
        (0..BOARD_SIZE)
            .filter(|&line| self.can_place(line, color))
            .map(DraftDestination::PatternLine)
            .chain(std::iter::once(DraftDestination::Floor))
            .collect()
    }

    /// How `count` tiles would split between the line and the floor
    pub fn preview_placement(&self, dest: DraftDestination, count: usize) -> (usize, usize) {
        match dest {
            DraftDestination::PatternLine(line) => {
                let placed = count.min(self.pattern_lines[line].space());
                (placed, count - placed)
            }
            DraftDestination::Floor => (0, count),
        }
    }

    /// Stage `count` tiles of `color`; excess spills to the floor.
    ///
    /// Returns the number of tiles that ended up on the floor. The caller
    /// guarantees `count` matches tiles actually drafted and that the
    /// destination passed `can_place`.
    pub fn place_tiles(&mut self, dest: DraftDestination, color: Color, count: usize) -> usize {
        let overflow = match dest {
            DraftDestination::PatternLine(line) => self.pattern_lines[line].add(color, count),
            DraftDestination::Floor => count,
        };
        for _ in 0..overflow {
            self.floor.push(Token::Tile(color));
        }
        overflow
    }

    pub fn add_to_floor(&mut self, token: Token) {
        self.floor.push(token);
    }

    /// Round end: move one tile of each full line to the wall and score it.
    ///
    /// Returns the leftover tiles of those lines (capacity - 1 each), which
    /// belong in the discard pile. Lines that are not full stay as they are.
    pub fn tile_wall(&mut self) -> Vec<Color> {
        let mut discards = Vec::new();

        for row in 0..BOARD_SIZE {
            let line = self.pattern_lines[row];
            if !line.is_full() {
                continue;
            }
            let Some(color) = line.color else {
                unreachable!("full pattern line {row} has no color");
            };

            let col = wall_column(row, color);
            debug_assert!(!self.wall[row][col], "wall cell ({row},{col}) already set");
            self.wall[row][col] = true;
            self.score += score_placement(&self.wall, row, col);

            discards.extend(std::iter::repeat(color).take(line.filled - 1));
            self.pattern_lines[row].clear();
        }

        discards
    }

    /// Apply floor penalties, clamp the score at zero and clear the floor.
    ///
    /// Returns the floor's tiles for the discard pile; the first-player
    /// marker is dropped.
    pub fn score_floor_line(&mut self) -> Vec<Color> {
        self.score = (self.score + floor_penalty(self.floor.len())).max(0);
        self.floor.drain(..).filter_map(Token::color).collect()
    }

    /// Add end-of-game bonuses; returns the bonus awarded.
    pub fn score_end_game(&mut self) -> i32 {
        let rows = self.completed_rows() as i32;
        let cols = (0..BOARD_SIZE)
            .filter(|&col| self.column_count(col) == BOARD_SIZE)
            .count() as i32;
        let colors = ALL_COLORS
            .iter()
            .filter(|&&color| self.color_count(color) == BOARD_SIZE)
            .count() as i32;

        let bonus = rows * ROW_BONUS + cols * COLUMN_BONUS + colors * COLOR_BONUS;
        self.score += bonus;
        bonus
    }

    /// Game-end trigger: any full wall row
    pub fn has_completed_row(&self) -> bool {
        self.completed_rows() > 0
    }

    pub fn completed_rows(&self) -> usize {
        (0..BOARD_SIZE)
            .filter(|&row| self.row_count(row) == BOARD_SIZE)
            .count()
    }

    /// Occupied cells in a wall row
    pub fn row_count(&self, row: usize) -> usize {
        self.wall[row].iter().filter(|&&set| set).count()
    }

    /// Occupied cells in a wall column
    pub fn column_count(&self, col: usize) -> usize {
        self.wall.iter().filter(|row| row[col]).count()
    }

    /// Wall cells of `color` that are occupied
    pub fn color_count(&self, color: Color) -> usize {
        (0..BOARD_SIZE)
            .filter(|&row| self.wall[row][wall_column(row, color)])
            .count()
    }

    /// Per-color count of tiles on this board (lines, wall, floor)
    pub(crate) fn census(&self) -> [usize; TILE_COLORS] {
        let mut counts = [0; TILE_COLORS];
        for line in &self.pattern_lines {
            if let Some(color) = line.color {
                counts[color.index()] += line.filled;
            }
        }
        for (row, cells) in self.wall.iter().enumerate() {
            for (col, &set) in cells.iter().enumerate() {
                if set {
                    counts[WALL_PATTERN[row][col].index()] += 1;
                }
            }
        }
        for color in self.floor.iter().filter_map(|t| t.color()) {
            counts[color.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_wall() -> Wall {
        [[false; BOARD_SIZE]; BOARD_SIZE]
    }

    // =========================================================================
    // Wall pattern
    // =========================================================================

    #[test]
    fn test_wall_pattern_is_diagonal_shift() {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let expected = (col + BOARD_SIZE - row) % BOARD_SIZE;
                assert_eq!(WALL_PATTERN[row][col].index(), expected);
            }
        }
    }

    #[test]
    fn test_each_color_once_per_row_and_column() {
        for color in ALL_COLORS {
            for i in 0..BOARD_SIZE {
                let in_row = WALL_PATTERN[i].iter().filter(|&&c| c == color).count();
                let in_col = (0..BOARD_SIZE).filter(|&r| WALL_PATTERN[r][i] == color).count();
                assert_eq!(in_row, 1);
                assert_eq!(in_col, 1);
            }
        }
    }

    #[test]
    fn test_wall_column_matches_pattern() {
        for row in 0..BOARD_SIZE {
            for color in ALL_COLORS {
                assert_eq!(WALL_PATTERN[row][wall_column(row, color)], color);
            }
        }
    }

    // =========================================================================
    // Placement scoring
    // =========================================================================

    #[test]
    fn test_score_placement_isolated() {
        let mut wall = empty_wall();
        wall[2][2] = true;
        assert_eq!(score_placement(&wall, 2, 2), 1);
    }

    #[test]
    fn test_score_placement_third_in_row() {
        let mut wall = empty_wall();
        wall[0][0] = true;
        wall[0][1] = true;
        wall[0][2] = true;
        assert_eq!(score_placement(&wall, 0, 2), 3);
    }

    #[test]
    fn test_score_placement_vertical() {
        let mut wall = empty_wall();
        wall[1][2] = true;
        wall[2][2] = true;
        wall[3][2] = true;
        assert_eq!(score_placement(&wall, 2, 2), 3);
    }

    #[test]
    fn test_score_placement_cross() {
        let mut wall = empty_wall();
        wall[1][1] = true; // above
        wall[2][0] = true; // left
        wall[2][1] = true; // placed
        assert_eq!(score_placement(&wall, 2, 1), 4, "row run 2 + column run 2");
    }

    #[test]
    fn test_score_placement_ignores_diagonals_and_gaps() {
        let mut wall = empty_wall();
        wall[0][0] = true;
        wall[1][1] = true;
        wall[3][3] = true;
        wall[1][3] = true;
        assert_eq!(score_placement(&wall, 1, 1), 1);
    }

    #[test]
    fn test_score_placement_full_cross() {
        let mut wall = empty_wall();
        for i in 0..BOARD_SIZE {
            wall[2][i] = true;
            wall[i][2] = true;
        }
        assert_eq!(score_placement(&wall, 2, 2), 10);
    }

    // =========================================================================
    // Pattern lines and placement
    // =========================================================================

    #[test]
    fn test_can_place_rules() {
        let mut board = PlayerBoard::new();
        assert!(board.can_place(0, Color::Blue));
        assert!(!board.can_place(BOARD_SIZE, Color::Blue), "out of range");

        board.place_tiles(DraftDestination::PatternLine(2), Color::Red, 1);
        assert!(board.can_place(2, Color::Red));
        assert!(!board.can_place(2, Color::Blue), "line locked to red");

        board.place_tiles(DraftDestination::PatternLine(0), Color::Blue, 1);
        assert!(!board.can_place(0, Color::Blue), "line full");

        board.wall[3][wall_column(3, Color::Yellow)] = true;
        assert!(
            !board.can_place(3, Color::Yellow),
            "color already on the wall in that row"
        );
        assert!(board.can_place(3, Color::Black));
    }

    #[test]
    fn test_valid_placements_always_include_floor() {
        let mut board = PlayerBoard::new();
        for row in 0..BOARD_SIZE {
            board.wall[row][wall_column(row, Color::White)] = true;
        }
        assert_eq!(
            board.valid_placements(Color::White),
            vec![DraftDestination::Floor]
        );
        assert_eq!(board.valid_placements(Color::Blue).len(), BOARD_SIZE + 1);
    }

    #[test]
    fn test_place_tiles_overflow_goes_to_floor() {
        let mut board = PlayerBoard::new();
        let overflow = board.place_tiles(DraftDestination::PatternLine(1), Color::Black, 4);

        assert_eq!(overflow, 2);
        assert_eq!(board.pattern_lines[1].filled, 2);
        assert_eq!(board.pattern_lines[1].color, Some(Color::Black));
        assert_eq!(board.floor.len(), 2);
        assert!(board.floor.iter().all(|&t| t == Token::Tile(Color::Black)));
    }

    #[test]
    fn test_place_tiles_on_floor() {
        let mut board = PlayerBoard::new();
        assert_eq!(board.place_tiles(DraftDestination::Floor, Color::Red, 3), 3);
        assert_eq!(board.floor.len(), 3);
        assert!(board.pattern_lines.iter().all(PatternLine::is_empty));
    }

    #[test]
    fn test_preview_placement() {
        let mut board = PlayerBoard::new();
        board.place_tiles(DraftDestination::PatternLine(3), Color::Red, 2);
        assert_eq!(board.preview_placement(DraftDestination::PatternLine(3), 3), (2, 1));
        assert_eq!(board.preview_placement(DraftDestination::PatternLine(4), 3), (3, 0));
        assert_eq!(board.preview_placement(DraftDestination::Floor, 3), (0, 3));
    }

    // =========================================================================
    // Round-end scoring
    // =========================================================================

    #[test]
    fn test_tile_wall_moves_full_lines_only() {
        let mut board = PlayerBoard::new();
        board.place_tiles(DraftDestination::PatternLine(0), Color::Blue, 1);
        board.place_tiles(DraftDestination::PatternLine(2), Color::Red, 3);
        board.place_tiles(DraftDestination::PatternLine(3), Color::Yellow, 2);

        let discards = board.tile_wall();

        assert_eq!(discards, vec![Color::Red, Color::Red]);
        assert!(board.wall[0][wall_column(0, Color::Blue)]);
        assert!(board.wall[2][wall_column(2, Color::Red)]);
        assert!(board.pattern_lines[0].is_empty());
        assert!(board.pattern_lines[2].is_empty());
        assert_eq!(board.pattern_lines[2].color, None);
        // Partial line is carried into the next round.
        assert_eq!(board.pattern_lines[3].filled, 2);
        assert_eq!(board.score, 2);
    }

    #[test]
    fn test_tile_wall_scores_in_row_order() {
        let mut board = PlayerBoard::new();
        // Blue at (0,0) then White at (1,0): the second tile sees the first.
        board.place_tiles(DraftDestination::PatternLine(0), Color::Blue, 1);
        board.place_tiles(DraftDestination::PatternLine(1), Color::White, 2);

        board.tile_wall();

        assert!(board.wall[0][0]);
        assert!(board.wall[1][0]);
        assert_eq!(board.score, 1 + 2);
    }

    #[test]
    fn test_floor_penalty_table() {
        assert_eq!(floor_penalty(0), 0);
        assert_eq!(floor_penalty(3), -4);
        assert_eq!(floor_penalty(7), -14);
        assert_eq!(floor_penalty(10), -14, "slots past the table are free");
    }

    #[test]
    fn test_score_floor_line() {
        let mut board = PlayerBoard::new();
        board.score = 10;
        board.add_to_floor(Token::FirstPlayerMarker);
        board.place_tiles(DraftDestination::Floor, Color::Red, 2);

        let discards = board.score_floor_line();

        assert_eq!(board.score, 6);
        assert_eq!(discards, vec![Color::Red, Color::Red], "marker is not discarded");
        assert!(board.floor.is_empty());
    }

    #[test]
    fn test_score_floor_line_clamps_at_zero() {
        let mut board = PlayerBoard::new();
        board.score = 2;
        board.place_tiles(DraftDestination::Floor, Color::Black, 3);
        board.score_floor_line();
        assert_eq!(board.score, 0);
    }

    // =========================================================================
    // End-game bonuses
    // =========================================================================

    #[test]
    fn test_endgame_bonus_row() {
        let mut board = PlayerBoard::new();
        board.wall[0] = [true; BOARD_SIZE];
        assert!(board.has_completed_row());
        assert_eq!(board.score_end_game(), ROW_BONUS);
    }

    #[test]
    fn test_endgame_bonus_column() {
        let mut board = PlayerBoard::new();
        for row in 0..BOARD_SIZE {
            board.wall[row][3] = true;
        }
        assert!(!board.has_completed_row());
        assert_eq!(board.score_end_game(), COLUMN_BONUS);
    }

    #[test]
    fn test_endgame_bonus_color() {
        let mut board = PlayerBoard::new();
        for row in 0..BOARD_SIZE {
            board.wall[row][wall_column(row, Color::Red)] = true;
        }
        assert_eq!(board.color_count(Color::Red), BOARD_SIZE);
        assert_eq!(board.score_end_game(), COLOR_BONUS);
    }

    #[test]
    fn test_endgame_bonuses_stack() {
        let mut board = PlayerBoard::new();
        board.score = 30;
        board.wall = [[true; BOARD_SIZE]; BOARD_SIZE];

        let bonus = board.score_end_game();

        assert_eq!(bonus, 5 * ROW_BONUS + 5 * COLUMN_BONUS + 5 * COLOR_BONUS);
        assert_eq!(board.score, 30 + bonus);
        assert_eq!(board.completed_rows(), 5);
    }
}
