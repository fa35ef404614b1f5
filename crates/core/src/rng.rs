//! RNG module - where new pieces come from
//!
//! A session samples piece kinds through the [`PieceSource`] trait so the host
//! can pick the randomization policy and tests can inject a fixed sequence.
//!
//! - [`SimpleRng`]: seeded LCG, uniform over the seven kinds (deterministic)
//! - [`SevenBag`]: the "7-bag" randomizer, shuffled with a [`SimpleRng`]
//! - [`StdRandom`]: uniform sampling backed by `rand`'s `StdRng`
//! - [`Sequence`]: cycles a fixed list of kinds

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of each newly spawned piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// A fresh seed drawn from the operating system's entropy source
pub fn entropy_seed() -> u32 {
    rand::thread_rng().next_u32()
}

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
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// 7-bag piece generator
///
/// Each bag holds one of every kind, shuffled; a new bag is drawn once the
/// current one is empty.
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    bag_index: usize,
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// Draw the next piece from the bag
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }
}

impl Default for SevenBag {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SevenBag {
    fn next_kind(&mut self) -> PieceKind {
        self.draw()
    }
}

/// Uniform sampling backed by `StdRng`
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PieceSource for StdRandom {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds, wrapping at the end
#[derive(Debug, Clone)]
pub struct Sequence {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl Sequence {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self { kinds, pos: 0 }
    }

    /// Always yields the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for Sequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
