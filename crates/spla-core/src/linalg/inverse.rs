//! Matrix inverse by Gauss-Jordan elimination with partial pivoting.
//!
//! The elimination runs in place on a working copy of the input, without an
//! identity-augmented matrix. At step `k` the largest-magnitude entry of
//! column `k` (rows `k..n`) is moved onto the diagonal by a row exchange, and
//! the pivot row and column are then transformed so that, after `n` steps,
//! the working copy holds the inverse of the row-permuted input. The row
//! exchanges are undone at the end as column exchanges, last step first.

use crate::error::{CoreError, Result};
use crate::{Float, Matrix};

/// Singularity threshold for the pivot magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// `factor * n * eps * max|a_ij|`, scaled to the input.
    Relative(f64),
    /// A fixed threshold, independent of the input.
    Absolute(f64),
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Relative(1.0)
    }
}

impl Tolerance {
    fn threshold<T: Float>(self, a: &Matrix<T>) -> T {
        match self {
            Tolerance::Relative(factor) => {
                let max_abs = a.iter().fold(T::zero(), |m, &x| m.max(x.abs()));
                T::from_f64(factor) * T::from_usize(a.rows()) * T::epsilon() * max_abs
            }
            Tolerance::Absolute(value) => T::from_f64(value),
        }
    }
}

/// Runtime options for [`GaussJordan::invert_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InverseConfig {
    pub tolerance: Tolerance,
}

impl InverseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Result of a successful Gauss-Jordan inversion.
///
/// Keeps the pivot row chosen at every elimination step alongside the
/// inverse.
#[derive(Debug, Clone)]
pub struct GaussJordan<T: Float> {
    inverse: Matrix<T>,
    /// `pivots[k]` is the row exchanged with row `k` at step `k`.
    pivots: Vec<usize>,
}

impl<T: Float> GaussJordan<T> {
    /// Invert `a` with the default configuration.
    ///
    /// ```
    /// # use spla_core::Matrix;
    /// # use spla_core::linalg::GaussJordan;
    /// let a = Matrix::from_vec(2, 2, vec![4.0_f64, 3.0, 6.0, 3.0]).unwrap();
    /// let gj = GaussJordan::invert(&a).unwrap();
    /// assert!((gj.inverse().at(1, 1) + 0.5).abs() < 1e-12);
    /// assert_eq!(gj.pivot_rows(), &[1, 1]);
    /// ```
    pub fn invert(a: &Matrix<T>) -> Result<Self> {
        Self::invert_with(a, &InverseConfig::default())
    }

    /// Invert `a`, leaving it untouched.
    ///
    /// Fails with [`CoreError::NotSquare`] for a non-square input and with
    /// [`CoreError::SingularMatrix`] when the best pivot of some step is not
    /// above the configured tolerance. A NaN or infinite pivot counts as
    /// singular.
    pub fn invert_with(a: &Matrix<T>, config: &InverseConfig) -> Result<Self> {
        let (rows, cols) = a.shape();
        if rows != cols {
            return Err(CoreError::NotSquare { rows, cols });
        }
        let n = rows;
        let threshold = config.tolerance.threshold(a);
        log::debug!("gauss-jordan inverse: n={n}, tolerance={}", threshold.to_f64());

        let mut w = a.clone();
        let mut pivots = Vec::with_capacity(n);
        let mut pivot_row = vec![T::zero(); n];

        for k in 0..n {
            // Largest |w[i][k]| for i >= k; ties keep the earlier row.
            let mut p = k;
            let mut max = w[(k, k)].abs();
            for i in (k + 1)..n {
                let v = w[(i, k)].abs();
                if v > max {
                    max = v;
                    p = i;
                }
            }

            if !max.is_finite() || !(max > threshold) {
                log::debug!(
                    "singular matrix at step {k}: pivot {} <= {}",
                    max.to_f64(),
                    threshold.to_f64()
                );
                return Err(CoreError::SingularMatrix {
                    step: k,
                    pivot: max.to_f64(),
                    tolerance: threshold.to_f64(),
                });
            }

            if p != k {
                log::trace!("step {k}: exchange rows {k} and {p}");
                w.swap_rows(k, p);
            }
            pivots.push(p);

            let piv = w[(k, k)].recip();
            w[(k, k)] = piv;

            // Pivot column, then the interior, then the pivot row. Each pass
            // reads values written by the one before.
            for i in (0..n).filter(|&i| i != k) {
                w[(i, k)] = -piv * w[(i, k)];
            }

            pivot_row.copy_from_slice(w.row(k));
            for (i, row) in w.row_slices_mut().enumerate() {
                if i == k {
                    continue;
                }
                let f = row[k];
                for (j, (x, &r)) in row.iter_mut().zip(pivot_row.iter()).enumerate() {
                    if j != k {
                        *x += f * r;
                    }
                }
            }

            for (j, x) in w.row_mut(k).iter_mut().enumerate() {
                if j != k {
                    *x *= piv;
                }
            }
        }

        for (k, &p) in pivots.iter().enumerate().rev() {
            if p != k {
                w.swap_columns(k, p);
            }
        }

        Ok(Self { inverse: w, pivots })
    }

    /// The inverse matrix.
    pub fn inverse(&self) -> &Matrix<T> {
        &self.inverse
    }

    pub fn into_inverse(self) -> Matrix<T> {
        self.inverse
    }

    /// The pivot row selected at each elimination step.
    pub fn pivot_rows(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of steps that exchanged two distinct rows.
    pub fn row_exchanges(&self) -> usize {
        self.pivots
            .iter()
            .enumerate()
            .filter(|&(k, &p)| p != k)
            .count()
    }
}

/// Inverse of a square matrix with the default tolerance.
///
/// ```
/// # use spla_core::Matrix;
/// # use spla_core::linalg::inverse;
/// let a = Matrix::from_vec(2, 2, vec![2.0_f64, 0.0, 0.0, 4.0]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
/// ```
pub fn inverse<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    GaussJordan::invert(a).map(GaussJordan::into_inverse)
}

/// Inverse of a square matrix with an explicit configuration.
pub fn inverse_with<T: Float>(a: &Matrix<T>, config: &InverseConfig) -> Result<Matrix<T>> {
    GaussJordan::invert_with(a, config).map(GaussJordan::into_inverse)
}

impl<T: Float> Matrix<T> {
    /// Matrix inverse. See [`inverse`].
    pub fn inv(&self) -> Result<Matrix<T>> {
        inverse(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::prod;

    fn mat(data: &[f64], n: usize) -> Matrix<f64> {
        Matrix::from_slice(n, n, data).unwrap()
    }

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < tol, "{a} vs {b}");
        }
    }

    #[test]
    fn test_inverse_2x2() {
        let a = mat(&[4.0, 3.0, 6.0, 3.0], 2);
        let inv = inverse(&a).unwrap();
        assert_close(&inv, &mat(&[-0.5, 0.5, 1.0, -2.0 / 3.0], 2), 1e-12);
        assert_close(&prod(&a, &inv).unwrap(), &Matrix::identity(2), 1e-12);
    }

    #[test]
    fn test_inverse_leaves_input_untouched() {
        let a = mat(&[4.0, 3.0, 6.0, 3.0], 2);
        let copy = a.clone();
        let _ = a.inv().unwrap();
        assert_eq!(a, copy);
    }

    #[test]
    fn test_inverse_3x3_known() {
        let a = mat(&[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0], 3);
        let expected = mat(&[-24.0, 18.0, 5.0, 20.0, -15.0, -4.0, -5.0, 4.0, 1.0], 3);
        assert_close(&inverse(&a).unwrap(), &expected, 1e-10);
    }

    #[test]
    fn test_inverse_chained_row_exchanges() {
        // Steps 0 and 1 both exchange with row 2, so the column swaps at the
        // end only cancel out when replayed last step first.
        let a = mat(&[0.0, 1.0, 2.0, 1.0, 0.0, 3.0, 4.0, -3.0, 8.0], 3);
        let gj = GaussJordan::invert(&a).unwrap();
        assert_eq!(gj.pivot_rows()[0], 2);
        assert_eq!(gj.pivot_rows()[1], 2);
        assert_eq!(gj.row_exchanges(), 2);
        assert_close(&prod(&a, gj.inverse()).unwrap(), &Matrix::identity(3), 1e-12);
        assert_close(&prod(gj.inverse(), &a).unwrap(), &Matrix::identity(3), 1e-12);
    }

    #[test]
    fn test_inverse_permutation() {
        let p = mat(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], 3);
        let inv = inverse(&p).unwrap();
        assert_eq!(inv, p.transpose());
    }

    #[test]
    fn test_pivot_rows() {
        let gj = GaussJordan::invert(&mat(&[4.0, 3.0, 6.0, 3.0], 2)).unwrap();
        assert_eq!(gj.pivot_rows(), &[1, 1]);
        assert_eq!(gj.row_exchanges(), 1);

        let gj = GaussJordan::invert(&Matrix::<f64>::identity(3)).unwrap();
        assert_eq!(gj.pivot_rows(), &[0, 1, 2]);
        assert_eq!(gj.row_exchanges(), 0);
    }

    #[test]
    fn test_pivot_search_compares_magnitudes() {
        // |-5| beats 3; a signed comparison would pick row 1.
        let a = mat(&[-5.0, 1.0, 3.0, 1.0], 2);
        let gj = GaussJordan::invert(&a).unwrap();
        assert_eq!(gj.pivot_rows(), &[0, 1]);
        assert_eq!(gj.row_exchanges(), 0);
        assert_close(&prod(&a, gj.inverse()).unwrap(), &Matrix::identity(2), 1e-12);
    }

    #[test]
    fn test_pivot_search_tie_keeps_earlier_row() {
        let a = mat(&[2.0, 1.0, -2.0, 3.0], 2);
        let gj = GaussJordan::invert(&a).unwrap();
        assert_eq!(gj.pivot_rows()[0], 0);
        assert_eq!(gj.row_exchanges(), 0);
        assert_close(&prod(&a, gj.inverse()).unwrap(), &Matrix::identity(2), 1e-12);
    }

    #[test]
    fn test_singular() {
        let a = mat(&[1.0, 2.0, 2.0, 4.0], 2);
        assert!(matches!(
            inverse(&a),
            Err(CoreError::SingularMatrix { step: 1, .. })
        ));
    }

    #[test]
    fn test_singular_zero_row_and_zero_matrix() {
        let a = mat(&[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 7.0, 8.0, 10.0], 3);
        assert!(matches!(inverse(&a), Err(CoreError::SingularMatrix { .. })));

        let z = Matrix::<f64>::zeros(2, 2);
        assert!(matches!(
            inverse(&z),
            Err(CoreError::SingularMatrix { step: 0, .. })
        ));
    }

    #[test]
    fn test_nan_is_singular() {
        let a = mat(&[f64::NAN, 1.0, 1.0, 1.0], 2);
        assert!(matches!(inverse(&a), Err(CoreError::SingularMatrix { .. })));
    }

    #[test]
    fn test_infinite_pivot_is_singular() {
        // A fixed threshold would otherwise accept the infinite pivot.
        let cfg = InverseConfig::new().with_tolerance(Tolerance::Absolute(1e-14));
        let a = mat(&[f64::INFINITY, 1.0, 1.0, 1.0], 2);
        assert!(matches!(
            inverse_with(&a, &cfg),
            Err(CoreError::SingularMatrix { step: 0, .. })
        ));
    }

    #[test]
    fn test_not_square() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            inverse(&a),
            Err(CoreError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_empty() {
        let inv = inverse(&Matrix::<f64>::new()).unwrap();
        assert_eq!(inv.shape(), (0, 0));
    }

    #[test]
    fn test_absolute_tolerance() {
        let cfg = InverseConfig::new().with_tolerance(Tolerance::Absolute(10.0));
        let r = inverse_with(&Matrix::<f64>::identity(2), &cfg);
        assert!(matches!(r, Err(CoreError::SingularMatrix { step: 0, .. })));

        let cfg = InverseConfig::new().with_tolerance(Tolerance::Absolute(1e-14));
        assert_eq!(
            inverse_with(&Matrix::<f64>::identity(2), &cfg).unwrap(),
            Matrix::identity(2)
        );
    }

    #[test]
    fn test_relative_tolerance_scales_with_input() {
        // Tiny but well-conditioned: an absolute epsilon would reject it.
        let a = mat(&[1e-20, 0.0, 0.0, 2e-20], 2);
        let inv = inverse(&a).unwrap();
        assert!((inv[0][0] - 1e20).abs() < 1e8);
        assert!((inv[1][1] - 5e19).abs() < 1e7);
    }

    #[test]
    fn test_f32() {
        let a = Matrix::from_vec(2, 2, vec![4.0_f32, 7.0, 2.0, 6.0]).unwrap();
        let inv = a.inv().unwrap();
        let expected = [0.6_f32, -0.7, -0.2, 0.4];
        for (x, y) in inv.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-5);
        }
    }
}
