//! RNG module - piece sources
//!
//! The game asks a [`PieceSource`] for every new piece. The default source draws
//! uniformly and independently from the seven kinds (no 7-bag, droughts are possible).
//! A scripted source replays a fixed sequence for deterministic tests and replays.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Supplies the kind of the next piece to spawn
pub trait PieceSource {
    fn next(&mut self) -> PieceKind;
}

impl<F: FnMut() -> PieceKind> PieceSource for F {
    fn next(&mut self) -> PieceKind {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // Low LCG bits have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform, independent piece selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPieceSource {
    rng: SimpleRng,
    seed: u32,
}

impl RandomPieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed from the wall clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Seeded when `seed` is set, clock-seeded otherwise
    pub fn from_seed(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_time(),
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieceSource {
    fn next(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed sequence, cycling when exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPieceSource {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl ScriptedPieceSource {
    /// An empty sequence yields `I` forever.
    pub fn new(sequence: impl Into<Vec<PieceKind>>) -> Self {
        Self {
            sequence: sequence.into(),
            index: 0,
        }
    }

    /// Number of pieces handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next(&mut self) -> PieceKind {
        if self.sequence.is_empty() {
            return PieceKind::I;
        }
        let kind = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        kind
    }
}
