//! Matrix and vector products.
//!
//! Every kernel accumulates in the element type `T`, in natural index order,
//! so results are reproducible for a fixed input. The inner loops walk the
//! row-major buffers with explicit strides: stride 1 along a row, stride
//! `cols` down a column.
//!
//! | Function | Computes | Result shape |
//! |----------|----------|--------------|
//! | [`prod`] / [`prod_into`] | `A * B` | `A.rows x B.cols` |
//! | [`prod_vec`] / [`prod_vec_into`] | `A * x` | `A.rows` |
//! | [`tran_prod`] | `A^T * B` | `A.cols x B.cols` |
//! | [`tran_prod_vec`] | `A^T * x` | `A.cols` |
//! | [`tran_prod_outer`] | `a * b^T` | `a.len x b.len` |

use crate::error::{CoreError, Result};
use crate::{Matrix, Scalar, Vector};

/// Strided dot product: `sum(x[k] * y[k])` over the shorter of the two.
#[inline]
fn strided_dot<'a, T, I, J>(x: I, y: J) -> T
where
    T: Scalar,
    I: Iterator<Item = &'a T>,
    J: Iterator<Item = &'a T>,
{
    x.zip(y).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

// ======================================================================
// Matrix x matrix
// ======================================================================

/// `out = a * b`, writing into a preallocated destination.
///
/// `out` is resized to `a.rows() x b.cols()`; when it already has that
/// shape its storage is reused, which makes this the form to call inside
/// loops.
///
/// ```
/// # use spla_core::Matrix;
/// # use spla_core::linalg::prod_into;
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
/// let mut c = Matrix::new();
/// prod_into(&a, &b, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn prod_into<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>, out: &mut Matrix<T>) -> Result<()> {
    let (m, k) = a.shape();
    let n = b.cols();
    if b.rows() != k {
        return Err(CoreError::DimensionMismatch {
            op: "prod",
            expected: (k, n),
            got: b.shape(),
        });
    }
    log::debug!("prod: {m}x{k} * {k}x{n}");

    out.resize(m, n);
    if n == 0 {
        return Ok(());
    }

    let b_data = b.as_slice();
    for (a_row, out_row) in a.row_slices().zip(out.as_mut_slice().chunks_exact_mut(n)) {
        for (j, c) in out_row.iter_mut().enumerate() {
            // row of `a` with stride 1, column j of `b` with stride n
            *c = strided_dot(a_row.iter(), b_data.iter().skip(j).step_by(n));
        }
    }
    Ok(())
}

/// `a * b` as a new matrix.
pub fn prod<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let mut out = Matrix::zeros(a.rows(), b.cols());
    prod_into(a, b, &mut out)?;
    Ok(out)
}

// ======================================================================
// Matrix x vector
// ======================================================================

/// `out = a * x`, writing into a preallocated vector.
///
/// `out` is resized to `a.rows()` (storage reused when it already fits).
pub fn prod_vec_into<T: Scalar>(a: &Matrix<T>, x: &Vector<T>, out: &mut Vector<T>) -> Result<()> {
    if x.len() != a.cols() {
        return Err(CoreError::DimensionMismatch {
            op: "prod_vec",
            expected: (a.cols(), 1),
            got: (x.len(), 1),
        });
    }

    out.resize(a.rows());
    for (a_row, y) in a.row_slices().zip(out.iter_mut()) {
        *y = strided_dot(a_row.iter(), x.iter());
    }
    Ok(())
}

/// `a * x` as a new vector.
///
/// ```
/// # use spla_core::{Matrix, Vector};
/// # use spla_core::linalg::prod_vec;
/// let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let x = Vector::from_vec(vec![1.0, 0.0, 1.0]);
/// assert_eq!(prod_vec(&a, &x).unwrap().as_slice(), &[4.0, 10.0]);
/// ```
pub fn prod_vec<T: Scalar>(a: &Matrix<T>, x: &Vector<T>) -> Result<Vector<T>> {
    let mut out = Vector::zeros(a.rows());
    prod_vec_into(a, x, &mut out)?;
    Ok(out)
}

// ======================================================================
// Transpose products
// ======================================================================

/// `a1^T * a2` without materialising the transpose.
///
/// Requires `a1.rows() == a2.rows()`; the result is `a1.cols() x a2.cols()`.
pub fn tran_prod<T: Scalar>(a1: &Matrix<T>, a2: &Matrix<T>) -> Result<Matrix<T>> {
    if a1.rows() != a2.rows() {
        return Err(CoreError::DimensionMismatch {
            op: "tran_prod",
            expected: (a1.rows(), a2.cols()),
            got: a2.shape(),
        });
    }
    let (k, m) = a1.shape();
    let n = a2.cols();
    log::debug!("tran_prod: ({k}x{m})^T * {k}x{n}");

    let mut out = Matrix::zeros(m, n);
    if n == 0 {
        return Ok(out);
    }

    let d1 = a1.as_slice();
    let d2 = a2.as_slice();
    for (i, out_row) in out.as_mut_slice().chunks_exact_mut(n).enumerate() {
        for (j, c) in out_row.iter_mut().enumerate() {
            // column i of `a1` and column j of `a2`, both walked top to bottom
            *c = strided_dot(
                d1.iter().skip(i).step_by(m),
                d2.iter().skip(j).step_by(n),
            );
        }
    }
    Ok(out)
}

/// `a^T * x` as a new vector of length `a.cols()`.
pub fn tran_prod_vec<T: Scalar>(a: &Matrix<T>, x: &Vector<T>) -> Result<Vector<T>> {
    if x.len() != a.rows() {
        return Err(CoreError::DimensionMismatch {
            op: "tran_prod_vec",
            expected: (a.rows(), 1),
            got: (x.len(), 1),
        });
    }
    let m = a.cols();
    if m == 0 {
        return Ok(Vector::new());
    }

    let data = a.as_slice();
    Ok((0..m)
        .map(|i| strided_dot(data.iter().skip(i).step_by(m), x.iter()))
        .collect())
}

/// Outer product `a * b^T`: a matrix with `out[i][j] = a[i] * b[j]`.
pub fn tran_prod_outer<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Matrix<T> {
    let mut out = Matrix::zeros(a.len(), b.len());
    if b.is_empty() {
        return out;
    }
    for (&ai, out_row) in a.iter().zip(out.as_mut_slice().chunks_exact_mut(b.len())) {
        for (c, &bj) in out_row.iter_mut().zip(b.iter()) {
            *c = ai * bj;
        }
    }
    out
}

// ======================================================================
// Convenience methods
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        prod(self, other)
    }

    /// Matrix-vector product `self * x`.
    pub fn matvec(&self, x: &Vector<T>) -> Result<Vector<T>> {
        prod_vec(self, x)
    }
}
