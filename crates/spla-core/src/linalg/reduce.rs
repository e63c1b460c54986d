//! Transpose, diagonal, identity-like construction, Frobenius norm, trace.

use crate::{Float, Matrix, Scalar, Vector};

/// `result[i][j] = a[j][i]`, with the dimensions swapped.
pub fn transpose<T: Scalar>(a: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = a.shape();
    let mut out = Matrix::zeros(cols, rows);
    for (i, row) in a.row_slices().enumerate() {
        for (j, &x) in row.iter().enumerate() {
            out[(j, i)] = x;
        }
    }
    out
}

/// The main diagonal, of length `min(rows, cols)`.
pub fn diag<T: Scalar>(a: &Matrix<T>) -> Vector<T> {
    let n = a.rows().min(a.cols());
    (0..n).map(|i| a[(i, i)]).collect()
}

/// An `n x n` matrix with `x` on the diagonal and zeros elsewhere.
///
/// ```
/// # use spla_core::linalg::eye;
/// let m = eye(3, 2.5_f64);
/// assert_eq!(m.at(2, 2), 2.5);
/// assert_eq!(m.at(1, 2), 0.0);
/// ```
pub fn eye<T: Scalar>(n: usize, x: T) -> Matrix<T> {
    let mut m = Matrix::zeros(n, n);
    for i in 0..n {
        m[(i, i)] = x;
    }
    m
}

/// Frobenius norm: square root of the sum of squared elements.
pub fn norm<T: Float>(a: &Matrix<T>) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Sum of the main diagonal.
pub fn trace<T: Scalar>(a: &Matrix<T>) -> T {
    diag(a).sum()
}

impl<T: Scalar> Matrix<T> {
    pub fn transpose(&self) -> Matrix<T> {
        transpose(self)
    }

    pub fn diag(&self) -> Vector<T> {
        diag(self)
    }

    pub fn trace(&self) -> T {
        trace(self)
    }
}

impl<T: Float> Matrix<T> {
    /// Frobenius norm.
    pub fn norm(&self) -> T {
        norm(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_transpose_degenerate() {
        let a = Matrix::<f64>::zeros(3, 0);
        assert_eq!(a.transpose().shape(), (0, 3));
    }

    #[test]
    fn test_diag_rectangular() {
        let a = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(a.diag().as_slice(), &[1, 5]);
        assert_eq!(a.transpose().diag().as_slice(), &[1, 5]);
    }

    #[test]
    fn test_eye() {
        let m = eye(2, 3_i32);
        assert_eq!(m.as_slice(), &[3, 0, 0, 3]);
        assert_eq!(eye(4, 1.0_f64), Matrix::identity(4));
        assert!(eye(0, 1.0_f64).is_empty());
    }

    #[test]
    fn test_norm() {
        let a = Matrix::from_vec(2, 2, vec![3.0_f64, 0.0, 0.0, 4.0]).unwrap();
        assert_eq!(a.norm(), 5.0);
        assert_eq!(Matrix::<f64>::new().norm(), 0.0);
    }

    #[test]
    fn test_trace() {
        let a = Matrix::from_vec(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(a.trace(), 15);
        assert_eq!(trace(&Matrix::<f64>::new()), 0.0);
    }
}
