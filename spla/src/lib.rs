//! # spla
//!
//! Dense matrices and vectors with 0-based and 1-based element access,
//! element-wise operators, product kernels and a Gauss-Jordan inverse.
//!
//! One `use spla::prelude::*;` gives you [`Matrix`](prelude::Matrix),
//! [`Vector`](prelude::Vector) and the numeric traits; the kernels live in
//! [`linalg`].
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `bounds-check` | Index validation on the fast accessors in release builds |
//!
//! ```
//! use spla::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![2.0_f64, 1.0, 1.0, 3.0]).unwrap();
//! let x = Vector::from_vec(vec![1.0, 1.0]);
//! assert_eq!(a.matvec(&x).unwrap().as_slice(), &[3.0, 4.0]);
//! assert!((spla::linalg::norm(&a) - 15.0_f64.sqrt()).abs() < 1e-12);
//! ```

pub use spla_core as core;
pub use spla_core::linalg;

/// Glob-import convenience: `use spla::prelude::*;`
pub mod prelude {
    pub use spla_core::prelude::*;
}
