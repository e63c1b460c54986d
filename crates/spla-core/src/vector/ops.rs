//! Element-wise arithmetic for [`Vector`].
//!
//! Same policy as the matrix operators: the operator traits panic on a
//! length mismatch, the `*_checked` methods return `Err`.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Scalar;
use crate::error::Result;

use super::Vector;

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $trait for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                assert_eq!(
                    self.len(), rhs.len(),
                    "shape mismatch in element-wise {}: {} vs {}",
                    stringify!($method), self.len(), rhs.len(),
                );
                self.data.iter().zip(rhs.data.iter()).map(|(&a, &b)| a $op b).collect()
            }
        }

        impl<T: Scalar> $trait for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: Vector<T>) -> Vector<T> {
                self.$assign_method(&rhs);
                self
            }
        }

        impl<T: Scalar> $trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(mut self, rhs: T) -> Vector<T> {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Scalar> $assign_trait<&Vector<T>> for Vector<T> {
            fn $assign_method(&mut self, rhs: &Vector<T>) {
                assert_eq!(
                    self.len(), rhs.len(),
                    "shape mismatch in element-wise {}: {} vs {}",
                    stringify!($assign_method), self.len(), rhs.len(),
                );
                for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
                    *a = *a $op b;
                }
            }
        }

        impl<T: Scalar> $assign_trait<T> for Vector<T> {
            fn $assign_method(&mut self, rhs: T) {
                for a in &mut self.data {
                    *a = *a $op rhs;
                }
            }
        }
    };
}

impl_vector_binop!(Add, add, AddAssign, add_assign, +);
impl_vector_binop!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_binop!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_binop!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.map(|a| -a)
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(mut self) -> Vector<T> {
        for a in &mut self.data {
            *a = -*a;
        }
        self
    }
}

impl<T: Scalar> Vector<T> {
    /// Element-wise addition, returning `Err` on length mismatch.
    pub fn add_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "add", |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on length mismatch.
    pub fn sub_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "sub", |a, b| a - b)
    }

    /// Element-wise multiplication, returning `Err` on length mismatch.
    pub fn mul_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "mul", |a, b| a * b)
    }

    /// Element-wise division, returning `Err` on length mismatch.
    pub fn div_checked(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "div", |a, b| a / b)
    }
}
