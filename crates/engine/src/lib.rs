//! Azul Game Engine
//!
//! Rules for the tile-drafting board game Azul, for 2-4 players. A `Game`
//! owns every board and tile; callers ask it for `valid_moves()` and feed one
//! back through `apply_move()`. Turn order, round scoring and game end are
//! driven from there.
//!
//! `Game` is plain data and cheap to deep-clone, so search code can explore
//! moves on copies without touching the real game.

mod bag;
mod board;
mod error;
mod game;
mod moves;
mod supply;
mod tiles;

pub use bag::Bag;
pub use board::{
    floor_penalty, score_placement, wall_column, PatternLine, PlayerBoard, Wall, BOARD_SIZE,
    COLOR_BONUS, COLUMN_BONUS, FLOOR_CAPACITY, FLOOR_PENALTY, ROW_BONUS, WALL_PATTERN,
};
pub use error::ApplyError;
pub use game::{num_factories_for_players, Game, Phase, StepOutcome, MAX_PLAYERS, MIN_PLAYERS};
pub use moves::{DraftDestination, DraftSource, Move};
pub use supply::{Center, Factory, FACTORY_CAPACITY};
pub use tiles::{
    Color, ParseColorError, Token, ALL_COLORS, TILES_PER_COLOR, TILE_COLORS, TOTAL_TILES,
};
