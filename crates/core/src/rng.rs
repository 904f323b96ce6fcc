//! RNG module - seeded tile generation
//!
//! Provides a simple LCG for deterministic board generation and refills,
//! and a `TileSource` that stamps every created tile with a monotonic id.
//! With a fixed seed the whole session (boards, refills, ids) is fully
//! reproducible.

use prism_match_types::{Element, SpecialKind, Tile};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for diagnostics and snapshots)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Seeded factory for tiles.
///
/// Owns the session RNG and the monotonic tile id counter. Every tile on a
/// board originates here, so two sessions with the same seed produce
/// identical tiles in identical order.
#[derive(Debug, Clone)]
pub struct TileSource {
    rng: SimpleRng,
    next_id: u32,
}

impl TileSource {
    /// Create a new tile source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    fn take_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Create a plain tile with a uniformly random element
    pub fn plain(&mut self) -> Tile {
        let element = Element::ALL[self.rng.next_range(Element::ALL.len() as u32) as usize];
        Tile::plain(self.take_id(), element)
    }

    /// Create a tile carrying a special kind with the given element
    pub fn special(&mut self, element: Element, kind: SpecialKind) -> Tile {
        Tile::special(self.take_id(), element, kind)
    }

    /// Number of tiles created so far
    pub fn tiles_created(&self) -> u32 {
        self.next_id
    }

    /// Current RNG state (for snapshots)
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_rng_zero_seed_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tile_source_monotonic_ids() {
        let mut tiles = TileSource::new(1);
        let a = tiles.plain();
        let b = tiles.plain();
        let c = tiles.special(Element::Fire, SpecialKind::Blast);

        assert_eq!(a.id, 0);
        assert_eq!(b.id, 1);
        assert_eq!(c.id, 2);
        assert_eq!(tiles.tiles_created(), 3);
    }

    #[test]
    fn test_tile_source_deterministic_elements() {
        let mut t1 = TileSource::new(777);
        let mut t2 = TileSource::new(777);

        for _ in 0..64 {
            assert_eq!(t1.plain(), t2.plain());
        }
    }

    #[test]
    fn test_tile_source_covers_all_elements() {
        let mut tiles = TileSource::new(9);
        let mut seen = [false; 5];
        for _ in 0..200 {
            let tile = tiles.plain();
            seen[(tile.element.code() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "all five elements should appear");
    }

    #[test]
    fn test_special_tile_carries_kind() {
        let mut tiles = TileSource::new(1);
        let tile = tiles.special(Element::Water, SpecialKind::BeamV);
        assert_eq!(tile.element, Element::Water);
        assert_eq!(tile.special, Some(SpecialKind::BeamV));
    }
}
