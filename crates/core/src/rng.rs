//! RNG module - uniform random piece generation
//!
//! Pieces are drawn by independent uniform choice over the seven kinds;
//! repeats are allowed (no 7-bag without-replacement shuffling). A
//! simple LCG keeps the sequence deterministic per seed for testing.

use crate::types::PieceKind;

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
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform, history-free piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind; each draw is an independent uniform
    /// choice among the seven kinds.
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (usable as a seed to reproduce the remaining
    /// sequence).
    pub fn state(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn rng_different_seeds_diverge() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn draw_covers_all_kinds_eventually() {
        let mut gen = PieceGenerator::new(7);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let kind = gen.draw();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "uniform draw missed a kind");
    }

    #[test]
    fn draw_allows_repeats() {
        // With independent uniform draws, some window of 8 consecutive
        // draws must contain a repeat for any seed (pigeonhole).
        let mut gen = PieceGenerator::new(42);
        let window: Vec<PieceKind> = (0..8).map(|_| gen.draw()).collect();
        let mut has_repeat = false;
        for (i, a) in window.iter().enumerate() {
            if window[i + 1..].contains(a) {
                has_repeat = true;
            }
        }
        assert!(has_repeat);
    }
}
