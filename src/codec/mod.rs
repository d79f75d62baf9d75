//! Text encodings for matrix files.
//!
//! Only the fixed-width layout exists today. [`encode`] and [`parse`] use
//! it at the default width of 3.

pub mod fixed_width;

pub use fixed_width::{DEFAULT_WIDTH, FixedWidth, MAX_WIDTH};

use crate::error::Result;
use crate::matrix::Matrix;

/// Encode with the default 3-character fields.
pub fn encode(matrix: &Matrix) -> Result<String> {
    FixedWidth::default().encode(matrix)
}

/// Parse with the default 3-character fields.
pub fn parse(text: &str) -> Result<Matrix> {
    FixedWidth::default().parse(text)
}
