//! Tile colors and floor-line tokens

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const TILE_COLORS: usize = 5;
pub const TILES_PER_COLOR: usize = 20;
pub const TOTAL_TILES: usize = TILE_COLORS * TILES_PER_COLOR;

/// Tile colors (order fixed: the wall pattern is defined in this index space)
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Color {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
}

pub const ALL_COLORS: [Color; TILE_COLORS] = [
    Color::Blue,
    Color::Yellow,
    Color::Red,
    Color::Black,
    Color::White,
];

impl Color {
    /// Convert from index to Color
    pub fn from_index(idx: usize) -> Option<Color> {
        ALL_COLORS.get(idx).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter symbol used on boards and in prompts
    pub fn symbol(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Black => 'K',
            Color::White => 'W',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown tile color `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "blue" => Ok(Color::Blue),
            "y" | "yellow" => Ok(Color::Yellow),
            "r" | "red" => Ok(Color::Red),
            "k" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Something that can occupy a floor-line slot
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Token {
    Tile(Color),
    /// Not a tile: never enters the bag and is removed from play when scored
    FirstPlayerMarker,
}

impl Token {
    pub fn color(self) -> Option<Color> {
        match self {
            Token::Tile(c) => Some(c),
            Token::FirstPlayerMarker => None,
        }
    }

    pub fn is_marker(self) -> bool {
        matches!(self, Token::FirstPlayerMarker)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tile(c) => write!(f, "{}", c.symbol()),
            Token::FirstPlayerMarker => f.write_str("1"),
        }
    }
}
