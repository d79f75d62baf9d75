//! Fixed-width text layout for integer matrices.
//!
//! Every value is right-justified in a field of `width` characters and
//! padded with spaces. Fields sit back to back with no separator and each
//! row ends with `\n`. With the default width of 3 the 2×2 matrix of fives
//! is `"  5  5\n  5  5\n"`.

use std::fmt::Write as _;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Field width used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 3;

/// Widest field accepted. `u32` needs at most 10 digits; the rest is padding.
pub const MAX_WIDTH: usize = 32;

/// Fixed-width codec with a configurable field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth {
    width: usize,
}

impl Default for FixedWidth {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl FixedWidth {
    /// Codec with `width` characters per field, `1..=MAX_WIDTH`.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 || width > MAX_WIDTH {
            return Err(MatrixError::config(format!(
                "field width must be between 1 and {}, got {}",
                MAX_WIDTH, width
            )));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest value that fits in one field, `None` if every `u32` fits.
    pub fn max_value(&self) -> Option<u32> {
        let width = u32::try_from(self.width).ok()?;
        10u64
            .checked_pow(width)
            .and_then(|limit| u32::try_from(limit - 1).ok())
    }

    /// Whether `value` has at most `width` digits.
    pub fn fits(&self, value: u32) -> bool {
        self.max_value().is_none_or(|max| value <= max)
    }

    /// [`MatrixError::Range`] unless `value` fits.
    pub fn check(&self, value: u32) -> Result<()> {
        if self.fits(value) {
            Ok(())
        } else {
            Err(MatrixError::Range {
                value,
                width: self.width,
            })
        }
    }

    /// Render `matrix` as text.
    ///
    /// Values are range-checked before anything is written, so an error
    /// never leaves half a matrix behind.
    ///
    /// ```
    /// use matfile::{FixedWidth, Matrix};
    ///
    /// let m = Matrix::filled(2, 2, 5);
    /// assert_eq!(FixedWidth::default().encode(&m).unwrap(), "  5  5\n  5  5\n");
    /// ```
    pub fn encode(&self, matrix: &Matrix) -> Result<String> {
        if let Some(max) = matrix.max_value() {
            self.check(max)?;
        }

        let mut out = String::with_capacity(matrix.rows() * (matrix.cols() * self.width + 1));
        for row in matrix.iter_rows() {
            for value in row {
                // Writing to a String cannot fail.
                let _ = write!(out, "{:>1$}", value, self.width);
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Parse text produced by [`FixedWidth::encode`].
    ///
    /// Trailing blank lines and trailing whitespace on a line are ignored.
    /// Anything else that isn't a grid of `width`-character integer fields
    /// with the same number of fields per line is a
    /// [`MatrixError::Format`].
    ///
    /// ```
    /// use matfile::FixedWidth;
    ///
    /// let m = FixedWidth::default().parse("  1  2  3\n  4  5  6\n\n").unwrap();
    /// assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    /// ```
    pub fn parse(&self, text: &str) -> Result<Matrix> {
        let lines: Vec<&str> = text.lines().collect();
        let mut end = lines.len();
        while end > 0 && lines[end - 1].trim().is_empty() {
            end -= 1;
        }

        let mut data = Vec::new();
        let mut cols: Option<usize> = None;

        for (idx, raw) in lines[..end].iter().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end();
            if line.is_empty() {
                return Err(MatrixError::format(line_no, "blank line inside matrix"));
            }

            let row_start = data.len();
            for (field_idx, chunk) in line.as_bytes().chunks(self.width).enumerate() {
                data.push(self.parse_field(chunk, line_no, field_idx)?);
            }

            let n = data.len() - row_start;
            match cols {
                None => cols = Some(n),
                Some(expected) if expected != n => {
                    return Err(MatrixError::format(
                        line_no,
                        format!("row has {} values, expected {}", n, expected),
                    ));
                }
                Some(_) => {}
            }
        }

        Matrix::new(data, end, cols.unwrap_or(0))
    }

    fn parse_field(&self, chunk: &[u8], line_no: usize, field_idx: usize) -> Result<u32> {
        let column = field_idx * self.width + 1;
        let field = std::str::from_utf8(chunk).map_err(|_| {
            MatrixError::format(
                line_no,
                format!("field at column {} is not valid text", column),
            )
        })?;

        // The line was right-trimmed, so a blank field can only sit between
        // two values.
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Err(MatrixError::format(
                line_no,
                format!("blank field at column {}", column),
            ));
        }

        trimmed.parse::<u32>().map_err(|e| {
            MatrixError::format(
                line_no,
                format!("field {:?} at column {}: {}", field, column, e),
            )
        })
    }
}
