//! Random matrix generation.
//!
//! The random source is always passed in. [`Generator`] picks one per call:
//! a seeded [`StdRng`] when a seed is configured, the thread-local RNG
//! otherwise.

use std::ops::RangeInclusive;

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::codec::FixedWidth;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Matrix with every cell drawn independently and uniformly from `range`.
///
/// ```
/// use matfile::generate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let m = generate(4, 3, 0..=20, &mut rng).unwrap();
/// assert_eq!(m.shape(), (4, 3));
/// assert!(m.as_slice().iter().all(|&v| v <= 20));
/// ```
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    range: RangeInclusive<u32>,
    rng: &mut R,
) -> Result<Matrix> {
    let (min, max) = range.into_inner();
    if min > max {
        return Err(MatrixError::config(format!(
            "empty value range {}..={}",
            min, max
        )));
    }

    let n = rows
        .checked_mul(cols)
        .ok_or_else(|| MatrixError::shape(format!("{}x{} overflows usize", rows, cols)))?;
    let dist = Uniform::new_inclusive(min, max);
    let data = (0..n).map(|_| dist.sample(rng)).collect();

    Matrix::new(data, rows, cols)
}

/// Shape, value range and optional seed for generated matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Smallest value, inclusive.
    pub min: u32,
    /// Largest value, inclusive.
    pub max: u32,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            rows: 16,
            cols: 16,
            min: 0,
            max: 20,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_shape(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the shape has cells, the range is non-empty and every value it
    /// can produce fits `codec`'s field.
    ///
    /// Zero rows or columns are refused: the text layout has no way to
    /// write an `r×0` or `0×c` matrix and read the same shape back.
    pub fn validate(&self, codec: &FixedWidth) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(MatrixError::config(format!(
                "matrix shape {}x{} has no cells",
                self.rows, self.cols
            )));
        }
        if self.min > self.max {
            return Err(MatrixError::config(format!(
                "min {} is greater than max {}",
                self.min, self.max
            )));
        }
        codec.check(self.max)
    }
}

/// Draws matrices according to a [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// One matrix. Same seed, same matrix.
    pub fn generate(&self) -> Result<Matrix> {
        let mut rng: Box<dyn RngCore> = match self.config.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::thread_rng()),
        };
        generate(
            self.config.rows,
            self.config.cols,
            self.config.min..=self.config.max,
            &mut rng,
        )
    }
}
