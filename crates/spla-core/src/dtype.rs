//! Element type hierarchy for matrices and vectors.
//!
//! ```text
//! Scalar  (f32, f64, all primitive integers)
//!   └── Float  (f32, f64)
//! ```
//!
//! Storage, indexing, the elementwise operators and the product kernels only
//! need [`Scalar`]. The inverse kernel and the norms need [`Float`].

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Base trait for every element type a [`Matrix`](crate::Matrix) or
/// [`Vector`](crate::Vector) can hold.
///
/// `FromStr` is part of the contract so that the text reader can parse any
/// element type without extra bounds at the call site.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + FromStr
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Convert from `usize` (used for dimension arithmetic).
    fn from_usize(v: usize) -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Floating-point element types (`f32`, `f64`).
pub trait Float: Scalar + Neg<Output = Self> {
    /// Machine epsilon.
    fn epsilon() -> Self;

    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn recip(self) -> Self;
    fn is_finite(self) -> bool;
    fn max(self, other: Self) -> Self;

    /// Convert from an `f64` (used for tolerances and constants).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64` (used when reporting values in errors).
    fn to_f64(self) -> f64;
}

// ===========================================================================
// Implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Float for $ty {
            #[inline]
            fn epsilon() -> Self {
                <$ty>::EPSILON
            }
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }
            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(v: f64) -> Self {
                v as Self
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(usize);
impl_scalar_int!(isize);
