//! Run configuration.

use std::path::PathBuf;

use crate::codec::{DEFAULT_WIDTH, FixedWidth};
use crate::error::Result;
use crate::generate::GeneratorConfig;

/// Everything a full run needs: matrix shape, value range, field width,
/// seed and where the three files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub min: u32,
    pub max: u32,
    pub width: usize,
    /// Seed for matrix A; matrix B uses the next seed.
    pub seed: Option<u64>,
    /// Directory the file names below are resolved against.
    pub dir: PathBuf,
    pub a_file: PathBuf,
    pub b_original_file: PathBuf,
    pub b_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            rows: generator.rows,
            cols: generator.cols,
            min: generator.min,
            max: generator.max,
            width: DEFAULT_WIDTH,
            seed: None,
            dir: PathBuf::from("."),
            a_file: PathBuf::from("matrixA.txt"),
            b_original_file: PathBuf::from("matrixB_original.txt"),
            b_file: PathBuf::from("matrixB.txt"),
        }
    }
}

impl Config {
    /// Codec for the configured field width.
    pub fn codec(&self) -> Result<FixedWidth> {
        FixedWidth::new(self.width)
    }

    /// Validate width, range and that the range fits the width.
    pub fn validate(&self) -> Result<()> {
        let codec = self.codec()?;
        self.generator(0).validate(&codec)
    }

    /// Generator settings for the `index`-th matrix of a run.
    ///
    /// Seeded runs offset the seed by `index` so the matrices differ but
    /// stay reproducible.
    pub fn generator(&self, index: u64) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            min: self.min,
            max: self.max,
            seed: self.seed.map(|s| s.wrapping_add(index)),
        }
    }

    pub fn a_path(&self) -> PathBuf {
        self.dir.join(&self.a_file)
    }

    pub fn b_original_path(&self) -> PathBuf {
        self.dir.join(&self.b_original_file)
    }

    pub fn b_path(&self) -> PathBuf {
        self.dir.join(&self.b_file)
    }
}
