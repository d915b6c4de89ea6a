use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::{
    errs::Error,
    skiplist::{
        DEFAULT_MAX_HEIGHT,
        DEFAULT_PROBABILITY,
    },
};

/// Upon the insertion of a new node, the node is replicated to higher levels
/// with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The tallest height this generator will ever draw.
    fn max_height(&self) -> usize;

    /// Draw the height for a new node, in `1..=max_height()`.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed heights.
///
/// A node has probability `p` of reaching each successive level, so
/// P(height >= h) = p^(h-1), truncated at `max_height`.
pub struct GeometricalLevelGenerator<R = SmallRng> {
    max_height: usize,
    p: f64,
    rng: R,
}

impl GeometricalLevelGenerator<SmallRng> {
    /// Create a generator seeded from system entropy.
    pub fn new(max_height: usize, p: f64) -> Result<Self, Error> {
        Self::with_rng(max_height, p, SmallRng::from_entropy())
    }

    /// Create a generator with a fixed seed. Two generators built from the
    /// same seed draw identical height sequences.
    pub fn from_seed(max_height: usize, p: f64, seed: u64) -> Result<Self, Error> {
        Self::with_rng(max_height, p, SmallRng::seed_from_u64(seed))
    }
}

impl Default for GeometricalLevelGenerator<SmallRng> {
    fn default() -> Self {
        match Self::new(DEFAULT_MAX_HEIGHT, DEFAULT_PROBABILITY) {
            | Ok(g) => g,
            | Err(_) => unreachable!("default parameters are valid"),
        }
    }
}

impl<R: Rng> GeometricalLevelGenerator<R> {
    /// Create a generator driven by a caller-supplied RNG.
    pub fn with_rng(max_height: usize, p: f64, rng: R) -> Result<Self, Error> {
        if max_height == 0 {
            return Err(Error::ZeroMaxHeight);
        }
        if p <= 0.0 || p >= 1.0 {
            return Err(Error::ProbabilityOutOfRange(p));
        }
        Ok(Self { max_height, p, rng })
    }
}

impl<R: Rng> LevelGenerator for GeometricalLevelGenerator<R> {
    fn max_height(&self) -> usize {
        self.max_height
    }

    fn random(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_height && self.rng.gen::<f64>() < self.p {
            height += 1;
        }
        height
    }
}
