#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;

/// Source of the random choices made when spawning a piece.
pub trait Randomizer: Send + Sync {
    /// Picks an index in `0..n`. `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Uniform choices backed by `fastrand`.
#[derive(Debug, Clone)]
pub struct FastRandomizer {
    rng: fastrand::Rng,
}

impl FastRandomizer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for FastRandomizer {
    fn pick(&mut self, n: usize) -> usize {
        self.rng.usize(0..n)
    }
}

/// Replays a fixed list of choices, wrapping around at the end.
///
/// Each value is reduced modulo the `n` it is asked for, so one list can feed both
/// the shape and the color choice.
#[derive(Debug, Clone)]
pub struct SequenceRandomizer {
    values: Vec<usize>,
    next: usize,
}

impl SequenceRandomizer {
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }
}

impl Randomizer for SequenceRandomizer {
    fn pick(&mut self, n: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % n
    }
}

/// World resource holding whichever randomizer the game was built with.
#[derive(Resource)]
pub struct PieceRandomizer(pub Box<dyn Randomizer>);

impl PieceRandomizer {
    pub fn new(randomizer: impl Randomizer + 'static) -> Self {
        Self(Box::new(randomizer))
    }

    pub fn pick(&mut self, n: usize) -> usize {
        self.0.pick(n)
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(FastRandomizer::new())
    }
}
