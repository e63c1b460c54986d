//! Dense two-dimensional matrix with contiguous row-major storage.
//!
//! A [`Matrix`] owns a single buffer of `rows * cols` elements. Every element
//! can be addressed two ways, and both address the same storage:
//!
//! - 0-based: `m[i][j]` (row slice, then element) or `m[(i, j)]`,
//!   offset `i * cols + j`;
//! - 1-based: `m.at(i, j)` / `m.at_mut(i, j)`, offset
//!   `(i - 1) * cols + (j - 1)`, the convention of textbook linear algebra.
//!
//! Row slices (`row`, `row_slices`) are the raw access path used by the
//! product kernels in [`linalg`](crate::linalg).
//!
//! Index validation on the panicking accessors is always on in debug builds
//! and can be enabled in release builds with the `bounds-check` feature.
//! The `get*` accessors are always checked and return `Result`.

mod create;
mod display;
mod ops;

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, Result};
use crate::{BOUNDS_CHECK, Scalar, Vector};

/// A dense, row-major matrix that owns its elements.
///
/// Cloning performs a deep copy; `clone_from` reuses the destination buffer
/// when the shapes already agree.
#[derive(Debug, Default)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// The empty 0x0 matrix.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Create a matrix from a flat row-major buffer.
    ///
    /// Returns an error if `data.len() != rows * cols`.
    ///
    /// ```
    /// # use spla_core::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m[1][0], 4);
    /// assert_eq!(m.at(2, 1), 4);
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(CoreError::InvalidShape {
                rows,
                cols,
                len: data.len(),
                reason: "buffer length does not match rows * cols",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from a flat row-major slice (copies the data).
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    // ------------------------------------------------------------------
    // Dimensions
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, `rows * cols`.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Extent along dimension `d`: `1` for rows, `2` for columns.
    pub fn dim(&self, d: usize) -> Result<usize> {
        match d {
            1 => Ok(self.rows),
            2 => Ok(self.cols),
            _ => Err(CoreError::InvalidArgument {
                reason: "dimension selector must be 1 (rows) or 2 (columns)",
            }),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Reallocate to `rows x cols`.
    ///
    /// A no-op when the shape is unchanged, so existing contents survive.
    /// Otherwise the old contents are discarded (this is not a reshape) and
    /// the new storage is zero-filled.
    pub fn resize(&mut self, rows: usize, cols: usize) -> &mut Self {
        if (rows, cols) != (self.rows, self.cols) {
            self.data = vec![T::zero(); checked_len(rows, cols)];
            self.rows = rows;
            self.cols = cols;
        }
        self
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    // ------------------------------------------------------------------
    // Offsets
    // ------------------------------------------------------------------

    #[inline]
    fn offset0(&self, i: usize, j: usize) -> usize {
        if BOUNDS_CHECK {
            assert!(
                i < self.rows && j < self.cols,
                "index out of bounds: ({i}, {j}) for {}x{} matrix",
                self.rows,
                self.cols
            );
        }
        i * self.cols + j
    }

    #[inline]
    fn offset1(&self, i: usize, j: usize) -> usize {
        if BOUNDS_CHECK {
            assert!(
                (1..=self.rows).contains(&i) && (1..=self.cols).contains(&j),
                "index out of bounds: 1-based ({i}, {j}) for {}x{} matrix",
                self.rows,
                self.cols
            );
        }
        i.wrapping_sub(1).wrapping_mul(self.cols).wrapping_add(j.wrapping_sub(1))
    }

    fn check0(&self, i: usize, j: usize) -> Result<usize> {
        if i < self.rows && j < self.cols {
            Ok(i * self.cols + j)
        } else {
            Err(CoreError::IndexOutOfBounds {
                index: (i, j),
                shape: self.shape(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// 1-based element read: `at(1, 1)` is the top-left element.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index when bounds checking is active.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.data[self.offset1(i, j)]
    }

    /// 1-based mutable element access.
    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut T {
        let k = self.offset1(i, j);
        &mut self.data[k]
    }

    /// Checked 0-based access.
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        let k = self.check0(i, j)?;
        Ok(&self.data[k])
    }

    /// Checked 0-based mutable access.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        let k = self.check0(i, j)?;
        Ok(&mut self.data[k])
    }

    /// Checked 0-based write.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    /// Checked 1-based access.
    pub fn get1(&self, i: usize, j: usize) -> Result<&T> {
        if i == 0 || j == 0 {
            return Err(CoreError::IndexOutOfBounds {
                index: (i, j),
                shape: self.shape(),
            });
        }
        self.get(i - 1, j - 1)
    }

    // ------------------------------------------------------------------
    // Raw row access
    // ------------------------------------------------------------------

    /// Row `i` (0-based) as a contiguous slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        if BOUNDS_CHECK {
            assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        }
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row `i` (0-based) as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        if BOUNDS_CHECK {
            assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        }
        let cols = self.cols;
        &mut self.data[i * cols..(i + 1) * cols]
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Iterate over the rows as mutable slices, top to bottom.
    pub fn row_slices_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let cols = self.cols;
        let mut rest: &mut [T] = &mut self.data;
        (0..self.rows).map(move |_| {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(cols);
            rest = tail;
            head
        })
    }

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Exchange two rows (0-based).
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Exchange two columns (0-based).
    pub fn swap_columns(&mut self, a: usize, b: usize) {
        if a == b || self.cols == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(self.cols) {
            row.swap(a, b);
        }
    }

    // ------------------------------------------------------------------
    // Row / column extraction and injection (1-based)
    // ------------------------------------------------------------------

    /// Copy row `i` (1-based) into a vector of length `cols`.
    pub fn get_row(&self, i: usize) -> Result<Vector<T>> {
        if !(1..=self.rows).contains(&i) {
            return Err(CoreError::IndexOutOfBounds {
                index: (i, 1),
                shape: self.shape(),
            });
        }
        Ok(Vector::from_slice(self.row(i - 1)))
    }

    /// Copy column `j` (1-based) into a vector of length `rows`.
    pub fn get_column(&self, j: usize) -> Result<Vector<T>> {
        if !(1..=self.cols).contains(&j) {
            return Err(CoreError::IndexOutOfBounds {
                index: (1, j),
                shape: self.shape(),
            });
        }
        Ok(self.row_slices().map(|row| row[j - 1]).collect())
    }

    /// Overwrite row `i` (1-based) with `v`, which must have length `cols`.
    pub fn set_row(&mut self, v: &Vector<T>, i: usize) -> Result<()> {
        if !(1..=self.rows).contains(&i) {
            return Err(CoreError::IndexOutOfBounds {
                index: (i, 1),
                shape: self.shape(),
            });
        }
        if v.len() != self.cols {
            return Err(CoreError::DimensionMismatch {
                op: "set_row",
                expected: (self.cols, 1),
                got: (v.len(), 1),
            });
        }
        self.row_mut(i - 1).copy_from_slice(v.as_slice());
        Ok(())
    }

    /// Overwrite column `j` (1-based) with `v`, which must have length `rows`.
    pub fn set_column(&mut self, v: &Vector<T>, j: usize) -> Result<()> {
        if !(1..=self.cols).contains(&j) {
            return Err(CoreError::IndexOutOfBounds {
                index: (1, j),
                shape: self.shape(),
            });
        }
        if v.len() != self.rows {
            return Err(CoreError::DimensionMismatch {
                op: "set_column",
                expected: (self.rows, 1),
                got: (v.len(), 1),
            });
        }
        let cols = self.cols;
        for (row, &x) in self.data.chunks_exact_mut(cols).zip(v.iter()) {
            row[j - 1] = x;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Map
    // ------------------------------------------------------------------

    /// Apply `f` to every element, returning a new matrix.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Combine two matrices of the same shape element by element.
    pub fn zip_map<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                op,
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// `rows * cols`, panicking on overflow like `Vec` does on capacity overflow.
fn checked_len(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(len) => len,
        None => panic!("matrix shape {rows}x{cols} overflows usize"),
    }
}

impl<T: Scalar> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.shape() == source.shape() {
            self.data.copy_from_slice(&source.data);
        } else {
            self.data.clone_from(&source.data);
            self.rows = source.rows;
            self.cols = source.cols;
        }
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

/// `m[i]` is row `i` as a slice, so `m[i][j]` is the 0-based element.
impl<T: Scalar> Index<usize> for Matrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, i: usize) -> &[T] {
        self.row(i)
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] {
        self.row_mut(i)
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[self.offset0(i, j)]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let k = self.offset0(i, j);
        &mut self.data[k]
    }
}
