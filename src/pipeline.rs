//! The full run: generate A, generate B, transpose B.

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::files::{generate_file, transpose_file};
use crate::matrix::Matrix;

/// Matrices produced by [`run`], in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub a: Matrix,
    pub b_original: Matrix,
    /// Transpose of `b_original`, as read back from its file.
    pub b: Matrix,
}

/// Write matrix A, matrix B and the transpose of B to the configured paths.
///
/// The configuration is validated up front, so a bad width or range fails
/// before any file exists. Each step reads or writes files only; B is
/// transposed from what was written to disk.
///
/// ```no_run
/// use matfile::{Config, run};
///
/// let out = run(&Config::default()).unwrap();
/// assert_eq!(out.b, out.b_original.transpose());
/// ```
#[tracing::instrument(skip_all, fields(dir = %config.dir.display()))]
pub fn run(config: &Config) -> Result<RunOutput> {
    config.validate()?;
    let codec = config.codec()?;

    let a = generate_file(&config.a_path(), &config.generator(0), &codec)?;
    let b_original = generate_file(&config.b_original_path(), &config.generator(1), &codec)?;
    let b = transpose_file(&config.b_original_path(), &config.b_path(), &codec)?;

    info!(rows = config.rows, cols = config.cols, "run complete");
    Ok(RunOutput { a, b_original, b })
}
