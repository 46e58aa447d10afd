//! RNG module - piece type selection
//!
//! Spawned kinds are drawn uniformly and independently from the seven tetrominoes
//! (no bag, no history). A simple LCG keeps games reproducible from a seed.
//!
//! [`FixedSequence`] replays a scripted list of kinds, for tests and demos.

use std::fmt;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of the kind for each spawned piece
pub trait PieceSource: fmt::Debug {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform choice among the seven kinds
#[derive(Debug, Clone)]
pub struct UniformRandomizer {
    rng: SimpleRng,
}

impl UniformRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformRandomizer {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl FixedSequence {
    /// An empty list falls back to a single `O`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, next: 0 }
    }
}

impl PieceSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
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
    fn test_rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_uniform_randomizer_covers_all_kinds() {
        let mut source = UniformRandomizer::new(12345);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }

        // Loose bounds around the expected 1000 per kind
        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!(
                (700..1300).contains(&count),
                "{:?} drawn {} times",
                kind,
                count
            );
        }
    }

    #[test]
    fn test_fixed_sequence_cycles() {
        let mut source = FixedSequence::new(vec![PieceKind::I, PieceKind::T]);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::I);

        let mut empty = FixedSequence::new(Vec::<PieceKind>::new());
        assert_eq!(empty.next_kind(), PieceKind::O);
    }
}
