//! Move representation

use std::fmt;

use crate::tiles::Color;

/// Where drafted tiles come from
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DraftSource {
    Factory(usize), // index 0..num_factories-1
    Center,
}

/// Where drafted tiles go
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DraftDestination {
    PatternLine(usize), // 0..=4
    Floor,
}

/// Draft every tile of `color` from `source` onto `dest`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub source: DraftSource,
    pub color: Color,
    pub dest: DraftDestination,
}

impl Move {
    pub fn new(source: DraftSource, color: Color, dest: DraftDestination) -> Self {
        Move {
            source,
            color,
            dest,
        }
    }
}

impl fmt::Display for DraftSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftSource::Factory(i) => write!(f, "factory {}", i + 1),
            DraftSource::Center => f.write_str("center"),
        }
    }
}

impl fmt::Display for DraftDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftDestination::PatternLine(r) => write!(f, "line {}", r + 1),
            DraftDestination::Floor => f.write_str("floor"),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Take {} from {}, place on {}",
            self.color, self.source, self.dest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_is_one_based() {
        let mv = Move::new(
            DraftSource::Factory(0),
            Color::Yellow,
            DraftDestination::PatternLine(2),
        );
        assert_eq!(mv.to_string(), "Take Yellow from factory 1, place on line 3");

        let mv = Move::new(DraftSource::Center, Color::Black, DraftDestination::Floor);
        assert_eq!(mv.to_string(), "Take Black from center, place on floor");
    }
}
