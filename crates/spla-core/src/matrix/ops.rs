//! Element-wise arithmetic operators for [`Matrix`].
//!
//! Implements `Add`, `Sub`, `Mul`, `Div` and their `*Assign` forms for:
//! - `Matrix<T> op Matrix<T>` (element-wise, same shape, panics on mismatch)
//! - `Matrix<T> op T` (scalar applied to every element)
//! - `T op Matrix<T>` for the primitive numeric types
//! - `Neg` for signed element types
//!
//! The `*_checked` methods are the non-panicking matrix-matrix forms.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Scalar;
use crate::error::Result;

use super::Matrix;

// ======================================================================
// Matrix op Matrix, Matrix op scalar, and the compound forms
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $assign_trait<&Matrix<T>> for Matrix<T> {
            fn $assign_method(&mut self, rhs: &Matrix<T>) {
                assert_eq!(
                    self.shape(), rhs.shape(),
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape(), rhs.shape(),
                );
                for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *a = *a $op b;
                }
            }
        }

        impl<T: Scalar> $assign_trait<Matrix<T>> for Matrix<T> {
            fn $assign_method(&mut self, rhs: Matrix<T>) {
                self.$assign_method(&rhs);
            }
        }

        impl<T: Scalar> $assign_trait<T> for Matrix<T> {
            fn $assign_method(&mut self, rhs: T) {
                for a in &mut self.data {
                    *a = *a $op rhs;
                }
            }
        }

        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                let mut out = self.clone();
                out.$assign_method(rhs);
                out
            }
        }

        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: Matrix<T>) -> Matrix<T> {
                self.$assign_method(&rhs);
                self
            }
        }

        impl<T: Scalar> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: &Matrix<T>) -> Matrix<T> {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Scalar> $trait<T> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: T) -> Matrix<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(mut self, rhs: T) -> Matrix<T> {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

impl_matrix_binop!(Add, add, AddAssign, add_assign, +);
impl_matrix_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_matrix_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_matrix_binop!(Div, div, DivAssign, div_assign, /);

// ======================================================================
// scalar op Matrix
// ======================================================================

// Addition and multiplication commute and delegate to the matrix-left
// form; subtraction and division keep the scalar on the left.
macro_rules! impl_scalar_left {
    ($($ty:ty),* $(,)?) => {$(
        impl Add<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn add(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                rhs + self
            }
        }

        impl Add<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn add(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                rhs + self
            }
        }

        impl Mul<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn mul(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                rhs * self
            }
        }

        impl Mul<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn mul(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                rhs * self
            }
        }

        impl Sub<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn sub(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                rhs.map(|a| self - a)
            }
        }

        impl Sub<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn sub(self, mut rhs: Matrix<$ty>) -> Matrix<$ty> {
                for a in &mut rhs.data {
                    *a = self - *a;
                }
                rhs
            }
        }

        impl Div<&Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn div(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                rhs.map(|a| self / a)
            }
        }

        impl Div<Matrix<$ty>> for $ty {
            type Output = Matrix<$ty>;

            fn div(self, mut rhs: Matrix<$ty>) -> Matrix<$ty> {
                for a in &mut rhs.data {
                    *a = self / *a;
                }
                rhs
            }
        }
    )*};
}

impl_scalar_left!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ======================================================================
// Negation
// ======================================================================

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|a| -a)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        for a in &mut self.data {
            *a = -*a;
        }
        self
    }
}

// ======================================================================
// Fallible (Result-returning) arithmetic for non-panicking callers
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Element-wise addition, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "add", |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "sub", |a, b| a - b)
    }

    /// Element-wise (Hadamard) multiplication, returning `Err` on shape
    /// mismatch.
    pub fn mul_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "mul", |a, b| a * b)
    }

    /// Element-wise division, returning `Err` on shape mismatch.
    pub fn div_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "div", |a, b| a / b)
    }
}
