//! RNG module - piece selection
//!
//! Each new piece kind is drawn independently and uniformly from the seven
//! kinds, with replacement. There is no bag: droughts and repeats can happen.
//!
//! Selection goes through the [`PieceSource`] trait so hosts can swap in a
//! scripted sequence for replays and tests.

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
    /// Uses the high half of the state; the low bits of an LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Supplies the kind of every spawned piece
pub trait PieceSource: fmt::Debug + Send {
    fn next_kind(&mut self) -> PieceKind;

    /// Seed that reproduces this source, if it has one
    fn seed(&self) -> Option<u32> {
        None
    }
}

/// Uniform, independent draws from all seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource {
    seed: u32,
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    fn seed(&self) -> Option<u32> {
        Some(self.seed)
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
///
/// An empty list yields I pieces.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            kinds: kinds.into(),
            pos: 0,
        }
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::I;
        }
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos = self.pos.wrapping_add(1);
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
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_source_produces_every_kind() {
        let mut source = UniformSource::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_uniform_source_allows_repeats() {
        // A 7-bag never repeats inside one group of 7.
        let mut source = UniformSource::new(9);
        let mut repeat_within_seven = false;
        for _ in 0..50 {
            let draws: Vec<_> = (0..7).map(|_| source.next_kind()).collect();
            for (i, a) in draws.iter().enumerate() {
                if draws[i + 1..].contains(a) {
                    repeat_within_seven = true;
                }
            }
        }
        assert!(repeat_within_seven);
    }

    #[test]
    fn test_uniform_source_replays_from_seed() {
        let mut a = UniformSource::new(2024);
        let mut b = UniformSource::new(a.seed().unwrap());
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_scripted_source_wraps() {
        let mut source = ScriptedSource::new([PieceKind::T, PieceKind::O]);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.seed(), None);
    }

    #[test]
    fn test_empty_script_yields_i() {
        let mut source = ScriptedSource::new(Vec::<PieceKind>::new());
        assert_eq!(source.next_kind(), PieceKind::I);
    }
}
