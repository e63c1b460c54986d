//! Matrix creation helpers.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// A `rows x cols` matrix of zeros.
    ///
    /// ```
    /// # use spla_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::full(rows, cols, T::zero())
    }

    /// A `rows x cols` matrix with every element set to `value`.
    pub fn full(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; super::checked_len(rows, cols)],
            rows,
            cols,
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Build a matrix from a list of equally long rows.
    ///
    /// ```
    /// # use spla_core::Matrix;
    /// let m = Matrix::from_rows(&[&[1, 2][..], &[3, 4], &[5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m.at(3, 2), 6);
    /// ```
    pub fn from_rows(rows: &[&[T]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(CoreError::InvalidShape {
                rows: rows.len(),
                cols,
                len: bad.len(),
                reason: "all rows must have the same length",
            });
        }
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_vec(rows.len(), cols, data)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));
        assert_eq!(m.size(), 12);
        assert!(m.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_full() {
        let m = Matrix::full(2, 3, 7_i32);
        assert!(m.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_identity() {
        let m = Matrix::<f64>::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[i][j], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(&[&[1, 2][..], &[3][..]]);
        assert!(r.is_err());
    }

    #[test]
    fn test_from_rows_empty() {
        let m = Matrix::<i32>::from_rows(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }
}
