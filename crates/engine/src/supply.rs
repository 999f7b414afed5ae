//! Factory displays and the center of the table

use smallvec::SmallVec;

use crate::tiles::{Color, ALL_COLORS, TILE_COLORS};

pub const FACTORY_CAPACITY: usize = 4;

/// Distinct colors of `tiles`, in first-seen order
fn distinct_colors(tiles: &[Color]) -> Vec<Color> {
    let mut seen = [false; TILE_COLORS];
    let mut colors = Vec::with_capacity(TILE_COLORS);
    for &tile in tiles {
        if !seen[tile.index()] {
            seen[tile.index()] = true;
            colors.push(tile);
        }
    }
    colors
}

/// A single factory display (up to 4 tiles, refilled each round)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Factory {
    pub tiles: SmallVec<[Color; FACTORY_CAPACITY]>,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add freshly drawn tiles
    pub fn fill<I>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = Color>,
    {
        self.tiles.extend(tiles);
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn has_color(&self, color: Color) -> bool {
        self.tiles.contains(&color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.tiles.iter().filter(|&&t| t == color).count()
    }

    /// Distinct colors present, in display order
    pub fn colors(&self) -> Vec<Color> {
        distinct_colors(&self.tiles)
    }

    /// Take every tile of `color`; everything else slides to the center.
    ///
    /// The factory is always left empty, even when `color` was absent.
    pub fn take_color(&mut self, color: Color, center: &mut Center) -> Vec<Color> {
        let (taken, rest): (Vec<Color>, Vec<Color>) =
            std::mem::take(&mut self.tiles).into_iter().partition(|&t| t == color);
        center.add_tiles(rest);
        taken
    }
}

/// Shared pool of leftovers plus the first-player marker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Center {
    pub tiles: Vec<Color>,
    pub has_first_player_marker: bool,
}

impl Default for Center {
    fn default() -> Self {
        Center {
            tiles: Vec::new(),
            has_first_player_marker: true,
        }
    }
}

impl Center {
    /// Fresh center for a new round: no tiles, marker present
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.tiles.clear();
        self.has_first_player_marker = true;
    }

    pub fn add_tiles<I>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = Color>,
    {
        self.tiles.extend(tiles);
    }

    /// True when no tiles remain. The marker is not a tile.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn has_color(&self, color: Color) -> bool {
        self.tiles.contains(&color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.tiles.iter().filter(|&&t| t == color).count()
    }

    pub fn colors(&self) -> Vec<Color> {
        distinct_colors(&self.tiles)
    }

    /// Per-color tile counts
    pub fn color_counts(&self) -> [usize; TILE_COLORS] {
        let mut counts = [0; TILE_COLORS];
        for color in ALL_COLORS {
            counts[color.index()] = self.count(color);
        }
        counts
    }

    /// Take every tile of `color`, leaving the rest in place.
    ///
    /// Also claims the first-player marker; the flag reports whether it was
    /// still here (true for exactly one take per round).
    pub fn take_color(&mut self, color: Color) -> (Vec<Color>, bool) {
        let (taken, rest): (Vec<Color>, Vec<Color>) =
            self.tiles.iter().partition(|&&t| t == color);
        self.tiles = rest;

        let took_marker = std::mem::replace(&mut self.has_first_player_marker, false);
        (taken, took_marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory(tiles: &[Color]) -> Factory {
        let mut f = Factory::new();
        f.fill(tiles.iter().copied());
        f
    }

    #[test]
    fn test_factory_take_partitions_into_center() {
        let mut center = Center::new();
        let mut f = factory(&[Color::Red, Color::Blue, Color::Red, Color::White]);

        let taken = f.take_color(Color::Red, &mut center);

        assert_eq!(taken, vec![Color::Red, Color::Red]);
        assert!(f.is_empty());
        assert_eq!(center.tiles, vec![Color::Blue, Color::White]);
        assert!(center.has_first_player_marker, "factory takes never touch the marker");
    }

    #[test]
    fn test_factory_take_absent_color_empties_into_center() {
        let mut center = Center::new();
        let mut f = factory(&[Color::Red, Color::Blue]);

        let taken = f.take_color(Color::Black, &mut center);

        assert!(taken.is_empty());
        assert!(f.is_empty());
        assert_eq!(center.tiles.len(), 2);
    }

    #[test]
    fn test_factory_colors_are_distinct_in_order() {
        let f = factory(&[Color::Black, Color::Blue, Color::Black, Color::Yellow]);
        assert_eq!(f.colors(), vec![Color::Black, Color::Blue, Color::Yellow]);
        assert_eq!(f.count(Color::Black), 2);
        assert!(f.has_color(Color::Yellow));
        assert!(!f.has_color(Color::Red));
    }

    #[test]
    fn test_center_first_take_claims_marker_once() {
        let mut center = Center::new();
        center.add_tiles([Color::Red, Color::Blue, Color::Red]);

        let (taken, marker) = center.take_color(Color::Red);
        assert_eq!(taken.len(), 2);
        assert!(marker);
        assert_eq!(center.tiles, vec![Color::Blue]);

        let (taken, marker) = center.take_color(Color::Blue);
        assert_eq!(taken.len(), 1);
        assert!(!marker);
        assert!(center.is_empty());
    }

    #[test]
    fn test_center_empty_of_tiles_can_still_hold_marker() {
        let mut center = Center::new();
        assert!(center.is_empty());
        assert!(center.has_first_player_marker);

        center.add_tiles([Color::Yellow]);
        center.take_color(Color::Yellow);
        center.reset();
        assert!(center.is_empty());
        assert!(center.has_first_player_marker);
    }

    #[test]
    fn test_center_color_counts() {
        let mut center = Center::new();
        center.add_tiles([Color::White, Color::White, Color::Blue]);
        assert_eq!(center.color_counts(), [1, 0, 0, 0, 2]);
        assert_eq!(center.colors(), vec![Color::White, Color::Blue]);
    }
}
