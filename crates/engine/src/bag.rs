//! Tile supply: the drawable bag and the discard pile ("lid")

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::tiles::{Color, ALL_COLORS, TILES_PER_COLOR, TILE_COLORS, TOTAL_TILES};

/// Seeded bag of tiles.
///
/// Every tile of the game is in exactly one of: `drawable`, `discarded`, or
/// somewhere on the table. `drawable` is kept shuffled, so drawing pops from
/// the back.
#[derive(Debug)]
pub struct Bag {
    drawable: Vec<Color>,
    discarded: Vec<Color>,
    seed: u64,
    rng: StdRng,
}

impl Bag {
    /// Full bag: 20 tiles of each color, shuffled with `seed`.
    pub fn new(seed: u64) -> Self {
        let mut drawable = Vec::with_capacity(TOTAL_TILES);
        for color in ALL_COLORS {
            drawable.extend(std::iter::repeat(color).take(TILES_PER_COLOR));
        }

        let mut bag = Bag {
            drawable,
            discarded: Vec::with_capacity(TOTAL_TILES),
            seed,
            rng: StdRng::seed_from_u64(seed),
        };
        bag.drawable.shuffle(&mut bag.rng);
        bag
    }

    /// Draw up to `n` tiles, refilling from the discard pile when the bag
    /// runs dry. Returns fewer than `n` only when both piles are empty.
    pub fn draw(&mut self, n: usize) -> Vec<Color> {
        let mut drawn = Vec::with_capacity(n);

        for _ in 0..n {
            if self.drawable.is_empty() {
                self.refill_from_discards();
            }
            match self.drawable.pop() {
                Some(tile) => drawn.push(tile),
                None => break,
            }
        }

        if drawn.len() < n {
            log::debug!("short draw: wanted {n}, got {}", drawn.len());
        }
        drawn
    }

    /// Move every discarded tile back into the bag and reshuffle.
    pub fn refill_from_discards(&mut self) {
        self.drawable.append(&mut self.discarded);
        self.drawable.shuffle(&mut self.rng);
    }

    /// Put tiles in the discard pile. Cardinality is not validated.
    pub fn discard<I>(&mut self, tiles: I)
    where
        I: IntoIterator<Item = Color>,
    {
        self.discarded.extend(tiles);
    }

    /// Tiles left in the bag (discards excluded)
    pub fn remaining(&self) -> usize {
        self.drawable.len()
    }

    pub fn discarded(&self) -> usize {
        self.discarded.len()
    }

    /// Tiles in bag plus discard pile
    pub fn total(&self) -> usize {
        self.drawable.len() + self.discarded.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Per-color count across both piles
    pub(crate) fn census(&self) -> [usize; TILE_COLORS] {
        let mut counts = [0; TILE_COLORS];
        for tile in self.drawable.iter().chain(&self.discarded) {
            counts[tile.index()] += 1;
        }
        counts
    }

    /// Pull one specific tile out of either pile (for rigging positions)
    #[cfg(test)]
    pub(crate) fn remove(&mut self, color: Color) -> bool {
        for pile in [&mut self.drawable, &mut self.discarded] {
            if let Some(i) = pile.iter().position(|&t| t == color) {
                pile.swap_remove(i);
                return true;
            }
        }
        false
    }
}

/// Clones re-seed their generator from the original seed instead of copying
/// the consumed generator state. A clone's future shuffles therefore depend
/// only on the seed, which keeps search clones reproducible from one call to
/// the next, but they diverge from what the original bag would shuffle.
impl Clone for Bag {
    fn clone(&self) -> Self {
        Bag {
            drawable: self.drawable.clone(),
            discarded: self.discarded.clone(),
            seed: self.seed,
            rng: StdRng::seed_from_u64(self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bag_holds_twenty_of_each() {
        let bag = Bag::new(7);
        assert_eq!(bag.remaining(), TOTAL_TILES);
        assert_eq!(bag.discarded(), 0);
        assert_eq!(bag.census(), [TILES_PER_COLOR; 5]);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = Bag::new(1234);
        let mut b = Bag::new(1234);
        assert_eq!(a.draw(20), b.draw(20));
    }

    #[test]
    fn test_draw_refills_from_discards() {
        let mut bag = Bag::new(3);
        let all = bag.draw(TOTAL_TILES);
        assert_eq!(all.len(), TOTAL_TILES);
        assert_eq!(bag.total(), 0);

        bag.discard(all[..10].iter().copied());
        assert_eq!(bag.remaining(), 0);
        assert_eq!(bag.discarded(), 10);

        let drawn = bag.draw(4);
        assert_eq!(drawn.len(), 4);
        assert_eq!(bag.remaining(), 6);
        assert_eq!(bag.discarded(), 0);
    }

    #[test]
    fn test_short_draw_when_both_piles_empty() {
        let mut bag = Bag::new(3);
        let _ = bag.draw(98);
        let drawn = bag.draw(4);
        assert_eq!(drawn.len(), 2);
        assert!(bag.draw(4).is_empty());
    }

    #[test]
    fn test_draw_and_discard_conserves_tiles() {
        let mut bag = Bag::new(99);
        let mut in_hand: Vec<Color> = Vec::new();

        // Cycle through the whole supply several times, forcing refills.
        for step in 0..60 {
            let drawn = bag.draw(7);
            in_hand.extend(drawn);
            assert_eq!(bag.total() + in_hand.len(), TOTAL_TILES);

            if step % 2 == 1 {
                bag.discard(in_hand.drain(..));
                assert_eq!(bag.total(), TOTAL_TILES);
            }
        }

        bag.discard(in_hand.drain(..));
        assert_eq!(bag.census(), [TILES_PER_COLOR; 5]);
    }

    #[test]
    fn test_clone_is_independent_and_reseeded() {
        let mut original = Bag::new(5);
        let _ = original.draw(95);
        original.discard([Color::Red, Color::Blue, Color::Blue]);

        let mut first = original.clone();
        let mut second = original.clone();
        assert_eq!(first.seed(), original.seed());

        // Both clones re-seed identically, so their refills match.
        assert_eq!(first.draw(8), second.draw(8));

        // The original is untouched by drawing from clones.
        assert_eq!(original.remaining(), 5);
        assert_eq!(original.discarded(), 3);
    }
}
