use thiserror::Error;

use crate::moves::{DraftDestination, DraftSource};
use crate::tiles::Color;

/// Why `Game::apply_move` rejected a move. The game is left unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("no {color} tiles at {from}")]
    EmptySource { from: DraftSource, color: Color },

    #[error("factory {} does not exist", .0 + 1)]
    NoSuchFactory(usize),

    #[error("{color} tiles cannot go on {dest}")]
    InvalidDestination { dest: DraftDestination, color: Color },

    #[error("the game is over")]
    GameOver,
}
