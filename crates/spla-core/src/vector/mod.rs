//! Owned, resizable one-dimensional container.
//!
//! [`Vector`] is the companion of [`Matrix`](crate::Matrix): rows and columns
//! are extracted into vectors, and the matrix-vector kernels consume and
//! produce them. Elements are addressable both 0-based (`v[i]`) and 1-based
//! (`v.at(i)`), and both views address the same storage.

mod display;
mod ops;

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, Result};
use crate::{BOUNDS_CHECK, Float, Scalar};

/// A dense vector that owns its elements. Cloning performs a deep copy.
#[derive(Debug, Default, PartialEq)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// An empty vector.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// A vector of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self::full(n, T::zero())
    }

    /// A vector of `n` copies of `value`.
    pub fn full(n: usize, value: T) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Take ownership of an existing buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new vector.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    // ------------------------------------------------------------------
    // Size
    // ------------------------------------------------------------------

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of elements (same as [`size`](Self::size)).
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reallocate to `n` elements.
    ///
    /// A no-op when the size is unchanged. Otherwise the old contents are
    /// discarded and the new storage is zero-filled.
    pub fn resize(&mut self, n: usize) -> &mut Self {
        if n != self.data.len() {
            self.data = vec![T::zero(); n];
        }
        self
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// 1-based element access: `at(1)` is the first element.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `1..=len`.
    #[inline]
    pub fn at(&self, i: usize) -> T {
        self.data[self.offset1(i)]
    }

    /// Mutable 1-based element access.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `1..=len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut T {
        let k = self.offset1(i);
        &mut self.data[k]
    }

    /// Checked 0-based access.
    pub fn get(&self, i: usize) -> Result<&T> {
        self.data.get(i).ok_or(CoreError::IndexOutOfBounds {
            index: (i, 0),
            shape: (self.data.len(), 1),
        })
    }

    /// Checked 1-based access.
    pub fn get1(&self, i: usize) -> Result<&T> {
        if i == 0 {
            return Err(CoreError::IndexOutOfBounds {
                index: (0, 1),
                shape: (self.data.len(), 1),
            });
        }
        self.get(i - 1)
    }

    #[inline]
    fn offset1(&self, i: usize) -> usize {
        if BOUNDS_CHECK {
            assert!(
                (1..=self.data.len()).contains(&i),
                "index out of bounds: 1-based index {i} for vector of length {}",
                self.data.len()
            );
        }
        i.wrapping_sub(1)
    }

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

    // ------------------------------------------------------------------
    // Map / reductions
    // ------------------------------------------------------------------

    /// Apply `f` to every element, returning a new vector.
    pub fn map<F>(&self, f: F) -> Vector<T>
    where
        F: Fn(T) -> T,
    {
        Vector {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Combine two vectors of the same length element by element.
    pub fn zip_map<F>(&self, other: &Vector<T>, op: &'static str, f: F) -> Result<Vector<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.len() != other.len() {
            return Err(CoreError::DimensionMismatch {
                op,
                expected: (self.len(), 1),
                got: (other.len(), 1),
            });
        }
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Inner product, accumulated in `T` in index order.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        if self.len() != other.len() {
            return Err(CoreError::DimensionMismatch {
                op: "dot",
                expected: (self.len(), 1),
                got: (other.len(), 1),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }
}

impl<T: Float> Vector<T> {
    /// Euclidean norm.
    pub fn norm(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }
}

impl<T: Scalar> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    // Reuses the existing allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one_based_views_agree() {
        let v = Vector::from_vec(vec![10, 20, 30]);
        for i in 0..v.len() {
            assert_eq!(v[i], v.at(i + 1));
        }
        assert_eq!(*v.get1(3).unwrap(), 30);
        assert_eq!(*v.get(0).unwrap(), 10);
    }

    #[test]
    fn test_checked_access_out_of_range() {
        let v = Vector::<f64>::zeros(2);
        assert!(v.get(2).is_err());
        assert!(v.get1(0).is_err());
        assert!(v.get1(3).is_err());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_at_zero_panics() {
        let v = Vector::<f64>::zeros(2);
        let _ = v.at(0);
    }

    #[test]
    fn test_resize_same_size_keeps_contents() {
        let mut v = Vector::from_vec(vec![1.0, 2.0]);
        v.resize(2);
        assert_eq!(v.as_slice(), &[1.0, 2.0]);
        v.resize(3);
        assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Vector::from_vec(vec![1, 2, 3]);
        let mut b = a.clone();
        *b.at_mut(1) = 99;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 99);

        let mut c = Vector::zeros(3);
        c.clone_from(&a);
        assert_eq!(c, a);
    }

    #[test]
    fn test_dot_and_norm() {
        let a = Vector::from_vec(vec![3.0_f64, 4.0]);
        assert_eq!(a.dot(&a).unwrap(), 25.0);
        assert_eq!(a.norm(), 5.0);
        assert!(a.dot(&Vector::zeros(3)).is_err());
    }

    #[test]
    fn test_from_iterator() {
        let v: Vector<i32> = (1..=4).collect();
        assert_eq!(v.size(), 4);
        assert_eq!(v.sum(), 10);
    }
}
