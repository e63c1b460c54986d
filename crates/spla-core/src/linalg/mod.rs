//! Linear algebra on [`Matrix`](crate::Matrix) and [`Vector`](crate::Vector).
//!
//! All routines are implemented from scratch, with no BLAS/LAPACK bindings.
//!
//! | Group | Operations | Complexity |
//! |-------|-----------|------------|
//! | products | `prod`, `prod_vec`, `tran_prod`, `tran_prod_vec`, `tran_prod_outer` | O(n^2) - O(n^3) |
//! | inverse | [`GaussJordan`], `inverse`, `inverse_with` | O(n^3) |
//! | reductions | `transpose`, `diag`, `eye`, `norm`, `trace` | O(n) - O(n^2) |

pub mod inverse;
pub mod product;
pub mod reduce;

pub use inverse::{GaussJordan, InverseConfig, Tolerance, inverse, inverse_with};
pub use product::{
    prod, prod_into, prod_vec, prod_vec_into, tran_prod, tran_prod_outer, tran_prod_vec,
};
pub use reduce::{diag, eye, norm, trace, transpose};
