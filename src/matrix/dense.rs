//! Dense row-major integer matrix.

use super::transpose::{transpose, transpose_square_in_place};
use crate::error::{MatrixError, Result};

/// Rectangular matrix of non-negative integers, stored row-major.
///
/// Every row has exactly `cols` values; the constructors refuse anything
/// else, so the rest of the crate can index without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    data: Vec<u32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Wrap a flat row-major buffer of `rows * cols` values.
    pub fn new(data: Vec<u32>, rows: usize, cols: usize) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or_else(|| MatrixError::shape(format!("{}x{} overflows usize", rows, cols)))?;
        if data.len() != expected {
            return Err(MatrixError::shape(format!(
                "expected {}x{}={} elements, got {}",
                rows,
                cols,
                expected,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. All rows must have the same length.
    ///
    /// ```
    /// use matfile::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m.get(1, 0), Some(4));
    ///
    /// assert!(Matrix::from_rows(vec![vec![1, 2], vec![3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::shape(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: u32) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at row `i`, column `j`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[u32] {
        assert!(i < self.rows, "row {} out of bounds for {} rows", i, self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.iter_rows().map(<[u32]>::to_vec).collect()
    }

    /// Largest value in the matrix, `None` when it has no cells.
    pub fn max_value(&self) -> Option<u32> {
        self.data.iter().copied().max()
    }

    /// Transposed copy: shape `(cols, rows)`, `t[j][i] == self[i][j]`.
    ///
    /// ```
    /// use matfile::Matrix;
    ///
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    /// ```
    pub fn transpose(&self) -> Self {
        let data = if self.rows == self.cols {
            let mut data = self.data.clone();
            transpose_square_in_place(&mut data, self.rows);
            data
        } else {
            let mut data = vec![0; self.data.len()];
            transpose(&self.data, &mut data, self.rows, self.cols);
            data
        };
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}
