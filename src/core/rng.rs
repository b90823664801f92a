//! RNG module - deterministic piece selection
//!
//! A small LCG behind a uniform piece picker: every draw is an independent
//! uniform choice from the catalog (no bag). Seeded, so the same seed always
//! produces the same piece sequence.

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
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a = 1664525, c = 1013904223, m = 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    /// Create a picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, uniformly at random from the catalog
    pub fn next(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Current RNG state (used to carry the sequence across a restart)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic_per_seed() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn picker_yields_every_kind_eventually() {
        let mut picker = PiecePicker::new(7);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = picker.next();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        for kind in PieceKind::ALL {
            assert!(seen.contains(&kind), "never drew {:?}", kind);
        }
    }

    #[test]
    fn picker_sequences_match_per_seed() {
        let mut a = PiecePicker::new(42);
        let mut b = PiecePicker::new(42);
        for _ in 0..50 {
            assert_eq!(a.next(), b.next());
        }
    }
}
