//! `spla-core`: dense matrices and vectors with a small linear-algebra kit.
//!
//! Provides a row-major [`Matrix`] with both 0-based (`m[i][j]`, `m[(i, j)]`)
//! and 1-based (`m.at(i, j)`) element access, a companion [`Vector`],
//! element-wise operators, product kernels, reductions and a Gauss-Jordan
//! inverse. The `spla` crate re-exports everything here.
//!
//! # Design
//!
//! - No math dependencies: every kernel is written from scratch.
//! - Generic over numeric types via the [`Scalar`] / [`Float`] trait
//!   hierarchy. Routines that need `sqrt` or division by a pivot are bounded
//!   on [`Float`].
//! - Operator traits panic on shape mismatch; the named functions and
//!   `*_checked` methods return [`Result`].
//! - The `bounds-check` feature keeps column validation on the fast
//!   accessors in release builds (it is always on with `debug_assertions`).
//!
//! ```
//! use spla_core::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![4.0_f64, 3.0, 6.0, 3.0]).unwrap();
//! let inv = a.inv().unwrap();
//! let eye = a.matmul(&inv).unwrap();
//! assert!((eye.at(1, 1) - 1.0).abs() < 1e-12);
//! assert!(eye.at(1, 2).abs() < 1e-12);
//! ```

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod vector;

#[cfg(test)]
mod property_tests;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;
pub use vector::Vector;

/// Whether the fast accessors validate indices.
pub(crate) const BOUNDS_CHECK: bool = cfg!(any(debug_assertions, feature = "bounds-check"));

/// Items intended for glob-import: `use spla_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{GaussJordan, InverseConfig, Tolerance};
    pub use crate::matrix::Matrix;
    pub use crate::vector::Vector;
}
